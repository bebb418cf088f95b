//! Assembles rendered fragments into a single module.

use crate::render::GeneratedFragment;

/// Fixed text emitted ahead of the generated items.
#[derive(Debug, Clone, Copy)]
pub struct Boilerplate {
    pub imports: &'static str,
    pub runtime: &'static str,
    /// Module-level names declared by `imports` and `runtime`.
    pub reserved_names: &'static [&'static str],
    /// Prelude names `runtime` and the generated items refer to. A
    /// module-level item with one of these names would shadow them.
    pub prelude_names: &'static [&'static str],
}

impl Boilerplate {
    /// Every name a generated item must not take.
    pub fn taken_names(&self) -> impl Iterator<Item = &'static str> {
        self.reserved_names
            .iter()
            .chain(self.prelude_names)
            .copied()
    }
}

pub const RUNTIME_BOILERPLATE: Boilerplate = Boilerplate {
    imports: "use std::{backtrace::Backtrace, error::Error as StdError, fmt};",
    runtime: include_str!("runtime/support.rs"),
    reserved_names: &[
        "Backtrace",
        "StdError",
        "fmt",
        "ERR_ID_BASE_ERROR",
        "ERR_ID_UNKNOWN_ERROR",
        "STACK_HEADER",
        "STACK_CAPTURE_POINT",
        "STACK_SKIP_FRAMES",
        "ErrorAttributes",
        "CodedError",
        "BaseError",
        "Error",
        "ErrorData",
        "chain_err_message",
        "prepare_error_to_send",
        "status_text",
        "new_error_message",
        "capture_stack",
        "trim_stack",
        "is_frame_start",
    ],
    prelude_names: &[
        "AsMut", "AsRef", "Box", "Clone", "Err", "Extend", "From", "Into", "Iterator", "None",
        "Ok", "Option", "Ord", "Send", "Some", "String", "Sync", "ToString", "Vec",
    ],
};

/// Builds the module text: header, imports, runtime library, identifier
/// constants, then payload, type and constructor of each error in the order
/// given.
pub fn compose(
    module_name: &str,
    fragments: &[GeneratedFragment],
    boilerplate: &Boilerplate,
) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(4 + fragments.len());
    parts.push(module_header(module_name));
    parts.push(boilerplate.imports.to_string());
    parts.push(boilerplate.runtime.trim_end().to_string());

    if !fragments.is_empty() {
        let constants: Vec<String> = fragments
            .iter()
            .map(|fragment| fragment.id_const.to_string())
            .collect();
        parts.push(constants.join("\n"));
    }
    for fragment in fragments {
        parts.push(fragment.to_string().trim_end().to_string());
    }

    let mut out = parts.join("\n\n");
    out.push('\n');
    out
}

fn module_header(module_name: &str) -> String {
    format!(
        "//! Error types of the `{}` module.\n\
         //!\n\
         //! Code generated by errgen. DO NOT EDIT.\n\
         //! Depends on the `http` crate.",
        module_name
    )
}
