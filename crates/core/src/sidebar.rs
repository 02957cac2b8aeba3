//! Builds the sidebar and appends it to the page body.
//!
//! The assembler runs once per page load. It is not idempotent: a second
//! run appends a second sidebar, re-parenting the menu into it.

use docbar_traits::DomTree;

use crate::config::SidebarConfig;
use crate::error::SidebarError;
use crate::helpers::{class_selector, create_element, query_first};
use crate::toolbar::{ToolbarLinks, transform_crosslinks};

/// What a run of the assembler produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Assembly<N> {
    /// The sidebar, now the last child of the body.
    pub sidebar: N,
    /// The toolbar. Left detached when the page had neither cross-links nor
    /// a menu.
    pub toolbar: N,
    /// The table of contents, re-parented into the sidebar.
    pub menu: Option<N>,
    /// Empty anchor added to the toolbar when a menu exists.
    pub menu_anchor: Option<N>,
    /// Toolbar entries built from the page's cross-links.
    pub links: Option<ToolbarLinks<N>>,
}

impl<N> Assembly<N> {
    /// `true` when the toolbar made it into the sidebar.
    pub fn has_toolbar(&self) -> bool {
        self.menu.is_some() || self.links.is_some()
    }
}

/// Assembles the sidebar of a documentation page.
///
/// # Example
///
/// ```
/// use docbar_core::SidebarAssembler;
/// use docbar_traits::{DomTree, InMemoryDom};
///
/// let dom = InMemoryDom::new();
/// let assembly = SidebarAssembler::new(&dom).assemble().unwrap();
/// assert_eq!(dom.children(&dom.body().unwrap()), vec![assembly.sidebar]);
/// ```
#[derive(Debug)]
pub struct SidebarAssembler<'a, D: DomTree> {
    dom: &'a D,
    config: SidebarConfig,
}

impl<'a, D: DomTree> SidebarAssembler<'a, D> {
    pub fn new(dom: &'a D) -> Self {
        Self {
            dom,
            config: SidebarConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SidebarConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SidebarConfig {
        &self.config
    }

    pub fn assemble(&self) -> Result<Assembly<D::Node>, SidebarError> {
        let dom = self.dom;
        let config = &self.config;
        config.validate()?;

        let menu = query_first(dom, &class_selector(&config.menu_class))?;
        let toolbar = create_element(dom, &config.container_tag, &config.toolbar_class, None)?;
        let sidebar = create_element(dom, &config.container_tag, &config.sidebar_class, None)?;
        let crosslinks = query_first(dom, &class_selector(&config.crosslinks_class))?;
        log::debug!(
            "Assembling sidebar on {} (menu: {}, crosslinks: {})",
            dom.name(),
            menu.is_some(),
            crosslinks.is_some()
        );

        let links = match &crosslinks {
            Some(crosslinks) => {
                let links = transform_crosslinks(dom, config, &toolbar, crosslinks)?;
                if menu.is_none() {
                    dom.append_child(&sidebar, &toolbar)?;
                }
                Some(links)
            }
            None => None,
        };

        let menu_anchor = match &menu {
            Some(menu) => {
                let anchor = create_element(dom, &config.placeholder_tag, "", None)?;
                dom.append_child(&toolbar, &anchor)?;
                dom.append_child(&sidebar, &toolbar)?;
                dom.append_child(&sidebar, menu)?;
                Some(anchor)
            }
            None => None,
        };

        let body = dom.body()?;
        dom.append_child(&body, &sidebar)?;

        Ok(Assembly {
            sidebar,
            toolbar,
            menu,
            menu_anchor,
            links,
        })
    }
}

/// Assemble the sidebar of `dom` with the default configuration.
pub fn assemble_sidebar<D: DomTree>(dom: &D) -> Result<Assembly<D::Node>, SidebarError> {
    SidebarAssembler::new(dom).assemble()
}
