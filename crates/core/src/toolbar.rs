//! Turns a generated cross-links container into toolbar entries.
//!
//! Anchors are moved out of the container into the toolbar in the order
//! previous, up, next, each relabelled with its arrow glyph. A role with no
//! anchor gets a synthesized placeholder so the toolbar always has three
//! positions. The emptied container is removed from the document.

use docbar_traits::DomTree;
use crate::config::SidebarConfig;
use crate::error::SidebarError;
use crate::helpers::{create_element, first_text, query_in, replace_text};
use crate::role::{NavRole, RoleSlots};

/// Where a toolbar entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkSource {
    /// An anchor found in the page's cross-links.
    Found,
    /// A placeholder created because the page had no such anchor.
    Synthesized,
}

/// One toolbar entry produced by [`transform_crosslinks`].
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarLink<N> {
    pub role: NavRole,
    pub node: N,
    pub source: LinkSource,
}

/// The entries appended to the toolbar, in toolbar order.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarLinks<N> {
    pub links: Vec<ToolbarLink<N>>,
}

impl<N> ToolbarLinks<N> {
    pub fn get(&self, role: NavRole) -> Option<&ToolbarLink<N>> {
        self.links.iter().find(|link| link.role == role)
    }

    /// Roles that had to be synthesized.
    pub fn synthesized(&self) -> Vec<NavRole> {
        self.links
            .iter()
            .filter(|link| link.source == LinkSource::Synthesized)
            .map(|link| link.role)
            .collect()
    }
}

/// Sort the anchors below `crosslinks` by role. Last anchor wins on
/// duplicate labels; anchors with any other label are skipped.
pub fn collect_roles<D: DomTree>(
    dom: &D,
    crosslinks: &D::Node,
) -> Result<RoleSlots<D::Node>, SidebarError> {
    let mut slots = RoleSlots::new();
    for anchor in query_in(dom, crosslinks, "a")? {
        let label = first_text(dom, &anchor);
        match label.as_deref().and_then(NavRole::from_label) {
            Some(role) => {
                if slots.insert(role, anchor).is_some() {
                    log::debug!("Duplicate '{}' cross-link, keeping the last one", role);
                }
            }
            None => log::trace!("Ignoring cross-link anchor labelled {:?}", label),
        }
    }
    Ok(slots)
}

/// Move the cross-links anchors into `toolbar` and drop the container.
pub fn transform_crosslinks<D: DomTree>(
    dom: &D,
    config: &SidebarConfig,
    toolbar: &D::Node,
    crosslinks: &D::Node,
) -> Result<ToolbarLinks<D::Node>, SidebarError> {
    let mut slots = collect_roles(dom, crosslinks)?;

    let mut links = Vec::with_capacity(NavRole::TOOLBAR_ORDER.len());
    for role in NavRole::TOOLBAR_ORDER {
        let (node, source) = match slots.take(role) {
            Some(anchor) => (anchor, LinkSource::Found),
            None => {
                log::debug!("No '{}' cross-link, synthesizing a placeholder", role);
                let placeholder = create_element(
                    dom,
                    &config.fallback_tag,
                    &config.blank_class,
                    Some(config.fallback_text.as_str()),
                )?;
                (placeholder, LinkSource::Synthesized)
            }
        };
        replace_text(dom, &node, config.glyphs.for_role(role))?;
        links.push(ToolbarLink { role, node, source });
    }

    for link in &links {
        dom.append_child(toolbar, &link.node)?;
    }
    dom.remove(crosslinks)?;

    Ok(ToolbarLinks { links })
}
