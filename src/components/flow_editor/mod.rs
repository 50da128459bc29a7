mod component;
mod connections;
mod drag;
mod form;
mod ids;
mod kind;
mod node;
mod panel;
mod registry;
mod types;

pub use component::FlowEditor;
pub use types::{Connection, ModuleMoved, ProgramModule};
