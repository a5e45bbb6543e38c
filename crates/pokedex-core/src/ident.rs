// ── Identifier codec ──
//
// Catalog urls carry the numeric id as their second-to-last `/` segment:
// `https://pokeapi.co/api/v2/pokemon/25/` splits into `[..., "25", ""]`.

use crate::model::NamedResource;

/// Highest id (exclusive) counted as part of the original generation.
pub const ORIGINAL_GENERATION_END: u32 = 150;

/// Numeric id of a resource, or `None` when the url does not have the
/// expected shape.
pub fn id_of(resource: &NamedResource) -> Option<u32> {
    id_from_url(&resource.url)
}

/// Same as [`id_of`], on a bare url.
pub fn id_from_url(url: &str) -> Option<u32> {
    let mut segments = url.rsplit('/');
    segments.next()?;
    segments.next()?.parse().ok()
}

/// Whether the resource belongs to the original generation (id < 150).
pub fn is_original_generation(resource: &NamedResource) -> bool {
    id_of(resource).is_some_and(|id| id < ORIGINAL_GENERATION_END)
}

/// Sort key placing every parsable id before every unparsable one.
pub(crate) fn sort_key(resource: &NamedResource) -> (bool, u32) {
    match id_of(resource) {
        Some(id) => (false, id),
        None => (true, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn res(url: &str) -> NamedResource {
        NamedResource::new("x", url)
    }

    #[test]
    fn trailing_slash_url_yields_id() {
        assert_eq!(id_of(&res("https://pokeapi.co/api/v2/pokemon/25/")), Some(25));
        assert_eq!(id_of(&res("https://pokeapi.co/api/v2/type/10001/")), Some(10001));
    }

    #[test]
    fn url_without_trailing_slash_reads_parent_segment() {
        // Second-to-last segment is "pokemon" here.
        assert_eq!(id_of(&res("https://pokeapi.co/api/v2/pokemon/25")), None);
    }

    #[test]
    fn short_or_garbage_urls_yield_none() {
        assert_eq!(id_of(&res("")), None);
        assert_eq!(id_of(&res("25")), None);
        assert_eq!(id_of(&res("/")), None);
        assert_eq!(id_of(&res("25/")), Some(25));
        assert_eq!(id_of(&res("https://pokeapi.co/api/v2/pokemon/-3/")), None);
        assert_eq!(id_of(&res("https://pokeapi.co/api/v2/pokemon/abc/")), None);
    }

    #[test]
    fn original_generation_boundary() {
        assert!(is_original_generation(&res("https://pokeapi.co/api/v2/pokemon/1/")));
        assert!(is_original_generation(&res("https://pokeapi.co/api/v2/pokemon/149/")));
        assert!(!is_original_generation(&res("https://pokeapi.co/api/v2/pokemon/150/")));
        assert!(!is_original_generation(&res("https://pokeapi.co/api/v2/pokemon/x/")));
    }

    #[test]
    fn unparsable_ids_sort_last() {
        let good = res("https://pokeapi.co/api/v2/pokemon/999/");
        let bad = res("nope");
        assert!(sort_key(&good) < sort_key(&bad));
    }
}
