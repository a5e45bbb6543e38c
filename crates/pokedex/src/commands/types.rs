//! `pokedex types`: list the type roster.

use serde::Serialize;
use tabled::Tabled;

use pokedex_core::{NamedResource, Pokedex, catalog};

use crate::config::Presentation;
use crate::error::CliError;
use crate::output;

#[derive(Debug, Serialize)]
struct TypeEntry {
    id: Option<u32>,
    name: String,
    /// One of the eighteen tags the type filter accepts.
    selectable: bool,
}

impl From<&NamedResource> for TypeEntry {
    fn from(r: &NamedResource) -> Self {
        Self {
            id: r.id(),
            name: r.name.clone(),
            selectable: r.as_type().is_some(),
        }
    }
}

#[derive(Tabled)]
struct TypeRow {
    #[tabled(rename = "#")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Filterable")]
    selectable: String,
}

fn to_row(t: &TypeEntry, color: bool) -> TypeRow {
    let selectable = if t.selectable { "yes" } else { "no" };
    TypeRow {
        id: t.id.map_or_else(|| "?".into(), |id| id.to_string()),
        name: t.name.clone(),
        selectable: if t.selectable {
            selectable.into()
        } else {
            output::dim(selectable, color)
        },
    }
}

pub async fn handle(dex: &Pokedex, p: Presentation) -> Result<(), CliError> {
    let types = catalog::load_types(dex.source()).await?;
    let data: Vec<TypeEntry> = types.iter().map(TypeEntry::from).collect();

    let color = output::should_color(p.color);
    let out = output::render_list(p.output, &data, |t| to_row(t, color), |t| t.name.clone());
    output::print_output(&out, p.quiet);
    Ok(())
}
