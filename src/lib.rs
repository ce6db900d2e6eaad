//! A dashboard watch face: draws a fixed gauge bitmap every frame and
//! listens for user style changes. All host state is injected so the face
//! can be driven by a real host or by [`host::runtime::HostRuntime`].

pub mod assets;
pub mod config;
pub mod display;
pub mod face;
pub mod host;
pub mod log;
pub mod style;

#[cfg(test)]
pub(crate) mod testing;
