//! Mountable view capability.
//!
//! A component names its template and insertion point through `MountSpec`,
//! renders itself from host templates, and is attached with `mount`.

use crate::state::project_state::ProjectState;
use crate::ui::host::{HostSurface, InsertPosition};
use crate::ui::UiError;
use log::debug;

/// Template and insertion point a component renders into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountSpec {
    pub template_id: String,
    pub host_id: String,
    pub element_id: String,
    pub position: InsertPosition,
}

/// View that can be configured against a store and rendered into a host.
pub trait Component {
    fn mount_spec(&self) -> &MountSpec;

    /// Wires the component to the store. Most components need nothing.
    fn configure(&mut self, _state: &mut ProjectState) {}

    /// Renders the component's full element markup.
    fn render(&self, host: &HostSurface) -> Result<String, UiError>;
}

/// Renders `component` and attaches it, replacing any previous render.
pub fn mount<C: Component + ?Sized>(component: &C, host: &mut HostSurface) -> Result<(), UiError> {
    let markup = component.render(host)?;
    let spec = component.mount_spec();
    if host.contains(&spec.element_id) {
        return host.replace(&spec.element_id, markup);
    }
    host.insert(&spec.host_id, spec.position, spec.element_id.clone(), markup)?;
    debug!(
        "event=component_mounted module=ui status=ok element_id={} template_id={}",
        spec.element_id, spec.template_id
    );
    Ok(())
}
