mod client;
mod codec;
mod collector;
mod domain;

pub use client::{EagleClient, EagleClientError};
pub use codec::{Command, ComponentSelection, ProtocolError};
pub use collector::EagleCollector;
pub use domain::{Component, Device, DeviceComponents, LastContact, Reading, Variable};
