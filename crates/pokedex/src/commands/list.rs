//! `pokedex list`: run the filter pipeline once and print what survives.

use std::str::FromStr;

use serde::Serialize;
use tabled::Tabled;

use pokedex_core::engine::validate_selection;
use pokedex_core::{
    CoreError, EngineState, FilterField, Intent, Pokedex, PokemonType, is_original_generation,
};

use crate::cli::ListArgs;
use crate::config::Presentation;
use crate::error::CliError;
use crate::output;

// ── Rows ─────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct Creature {
    id: Option<u32>,
    name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    types: Vec<PokemonType>,
    favourite: bool,
    original_generation: bool,
}

#[derive(Tabled)]
struct CreatureRow {
    #[tabled(rename = "#")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Types")]
    types: String,
    #[tabled(rename = "Gen")]
    generation: String,
    #[tabled(rename = "Fav")]
    favourite: String,
}

fn creatures(state: &EngineState) -> Vec<Creature> {
    state
        .displayed
        .iter()
        .map(|r| Creature {
            id: r.id(),
            name: r.name.clone(),
            types: state.types_of(&r.name).map(<[_]>::to_vec).unwrap_or_default(),
            favourite: state.is_favourite(&r.name),
            original_generation: is_original_generation(r),
        })
        .collect()
}

fn to_row(c: &Creature, color: bool) -> CreatureRow {
    let types = c
        .types
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    CreatureRow {
        id: c.id.map_or_else(|| "?".into(), |id| id.to_string()),
        name: c.name.clone(),
        types: output::dim(&types, color),
        generation: if c.original_generation { "I".into() } else { String::new() },
        favourite: output::favourite_marker(c.favourite, color),
    }
}

// ── Argument parsing ─────────────────────────────────────────────────

/// Parse `--type` values, case-insensitively, and enforce the two-type limit.
pub fn parse_types(raw: &[String]) -> Result<Vec<PokemonType>, CliError> {
    let parsed = raw
        .iter()
        .map(|s| {
            PokemonType::from_str(&s.to_ascii_lowercase()).map_err(|_| CliError::Validation {
                field: "type".into(),
                reason: format!("unknown type '{s}'"),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    validate_selection(&parsed).map_err(|e| match e {
        CoreError::ValidationFailed { message } => CliError::Validation {
            field: "type".into(),
            reason: message,
        },
        other => other.into(),
    })
}

// ── Handler ──────────────────────────────────────────────────────────

pub async fn handle(dex: &Pokedex, args: ListArgs, p: Presentation) -> Result<(), CliError> {
    // Reject bad selections before touching the network
    let types = parse_types(&args.types)?;

    dex.initialize().await?;

    for name in args.favourites {
        dex.dispatch(Intent::AddFavourite(name)).await;
    }
    if args.only_favourites {
        dex.add_filter(FilterField::Favourite, true).await;
    } else if args.exclude_favourites {
        dex.add_filter(FilterField::Favourite, false).await;
    }
    if let Some(query) = args.query {
        dex.search(query).await;
    }
    dex.set_selected_types(&types).await?;

    let state = dex.snapshot();
    if let Some(ref message) = state.error {
        return Err(CliError::CatalogUnavailable {
            message: message.clone(),
        });
    }

    let data = creatures(&state);
    let color = output::should_color(p.color);
    let out = output::render_list(p.output, &data, |c| to_row(c, color), |c| c.name.clone());
    output::print_output(&out, p.quiet);
    Ok(())
}
