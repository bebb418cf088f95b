//! The generation run: parse, render, compose, format, write.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::{
    compose::{RUNTIME_BOILERPLATE, compose},
    config::GeneratorConfig,
    definition::{DefinitionSet, parse},
    error::GenerateError,
    format::format_source,
    io::{read_definitions, write_generated},
    render::{GeneratedFragment, RenderError, render},
};

/// Runs the whole generator for `config`. The output file is only touched
/// once every stage has succeeded.
#[tracing::instrument(level = "debug", skip_all, fields(
    definitions = %config.definitions_path.display(),
    output = %config.output_path.display(),
))]
pub fn run(config: &GeneratorConfig) -> Result<(), GenerateError> {
    let raw = read_definitions(&config.definitions_path)?;
    tracing::info!(
        bytes = raw.len(),
        path = %config.definitions_path.display(),
        "read error definitions"
    );

    let source = generate_source(&raw, &config.module_name)?;

    write_generated(&config.output_path, &source)?;
    tracing::info!(
        bytes = source.len(),
        path = %config.output_path.display(),
        "wrote generated errors"
    );
    Ok(())
}

/// Generates the formatted module text for a raw definition document.
pub fn generate_source(raw: &[u8], module_name: &str) -> Result<String, GenerateError> {
    let definitions = parse(raw)?;
    tracing::info!(count = definitions.len(), "parsed error definitions");

    let fragments = render_all(&definitions)?;
    let composed = compose(module_name, &fragments, &RUNTIME_BOILERPLATE);
    Ok(format_source(&composed)?)
}

/// Renders every definition in parallel. Results keep definition order, and
/// the reported failure is the first one in that order.
pub fn render_all(definitions: &DefinitionSet) -> Result<Vec<GeneratedFragment>, GenerateError> {
    let rendered: Vec<Result<GeneratedFragment, GenerateError>> = definitions
        .as_slice()
        .par_iter()
        .map(|def| {
            let fragment = render(def).map_err(|source| GenerateError::Render {
                name: def.name.clone(),
                source,
            })?;
            tracing::debug!(name = %def.name, id = %fragment.id_const.value, "rendered error");
            Ok(fragment)
        })
        .collect();
    let fragments = rendered.into_iter().collect::<Result<Vec<_>, _>>()?;

    check_item_names(&fragments)?;
    Ok(fragments)
}

/// Derived names of different errors must not clash with each other, with
/// the runtime support items, or with the prelude names those items use.
fn check_item_names(fragments: &[GeneratedFragment]) -> Result<(), GenerateError> {
    let mut owners: HashMap<String, Option<&str>> = RUNTIME_BOILERPLATE
        .taken_names()
        .map(|name| (name.to_string(), None))
        .collect();

    for fragment in fragments {
        for item in fragment.item_names() {
            if let Some(owner) = owners.get(&item) {
                let other = match owner {
                    Some(error_name) => format!("an item of the error {}", error_name),
                    None => "the runtime support library".to_string(),
                };
                return Err(GenerateError::Render {
                    name: fragment.error_name.clone(),
                    source: RenderError::NameCollision { item, other },
                });
            }
            owners.insert(item, Some(fragment.error_name.as_str()));
        }
    }
    Ok(())
}
