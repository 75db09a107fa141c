//! # gpa-template
//!
//! Enforcement actions for the Group Policy applier.
//!
//! An applier resolves a [`TemplateBinding`] (template id plus variables) and
//! hands it to an [`ActionFactory`], which returns an [`Enforcement`] action.
//! Calling [`Enforcement::generate`] renders the template and activates the
//! result on the system.
//!
//! The only backend shipped here is polkit: [`PolkitRule`] renders a
//! `*.rules.tmpl` template into `/etc/polkit-1/rules.d`.

pub mod binding;
pub mod error;
pub mod polkit;
pub mod render;

pub use binding::{ActionFactory, Enforcement, TemplateBinding};
pub use error::TemplateError;
pub use polkit::{js_literal, PolkitConfig, PolkitRule, PolkitRuleFactory};
pub use render::render;
