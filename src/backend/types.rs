//! Wire schema of the lookup service and the record the UI renders

use serde::Deserialize;

use crate::error::LookupError;

/// One successful lookup, normalized for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pokemon {
    pub name: String,
    pub sprite_url: Option<String>,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub name: String,
    pub base: u32,
}

/// `GET /api/v2/pokemon/{key}` body. Only the fields we render are declared;
/// serde ignores the rest.
#[derive(Debug, Deserialize)]
pub struct PokemonPayload {
    pub name: String,
    pub sprites: SpritesPayload,
    pub types: Vec<TypeSlot>,
    pub abilities: Vec<AbilitySlot>,
    pub stats: Vec<StatSlot>,
}

#[derive(Debug, Deserialize)]
pub struct SpritesPayload {
    /// Null for a handful of forms that have no default artwork.
    pub front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

impl From<PokemonPayload> for Pokemon {
    fn from(payload: PokemonPayload) -> Self {
        Self {
            name: payload.name,
            sprite_url: payload.sprites.front_default,
            types: payload.types.into_iter().map(|t| t.kind.name).collect(),
            abilities: payload
                .abilities
                .into_iter()
                .map(|a| a.ability.name)
                .collect(),
            stats: payload
                .stats
                .into_iter()
                .map(|s| Stat {
                    name: s.stat.name,
                    base: s.base_stat,
                })
                .collect(),
        }
    }
}

impl Pokemon {
    /// Decode a response body, rejecting payloads that miss required fields.
    pub fn from_json(body: &[u8]) -> Result<Self, LookupError> {
        let payload: PokemonPayload = serde_json::from_slice(body)
            .map_err(|e| LookupError::Transport(format!("malformed payload: {}", e)))?;
        Ok(payload.into())
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_pikachu() {
        let pokemon = pikachu();
        assert_eq!(pokemon.name, "pikachu");
        assert_eq!(pokemon.sprite_url.as_deref(), Some("https://img.example/25.png"));
        assert_eq!(pokemon.types, vec!["electric"]);
        assert_eq!(pokemon.abilities, vec!["static", "lightning-rod"]);
    }

    #[test]
    fn test_stats_keep_payload_order() {
        let names: Vec<_> = pikachu().stats.into_iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec!["hp", "attack", "defense", "special-attack", "special-defense", "speed"]
        );
    }

    #[test]
    fn test_null_sprite_is_allowed() {
        let body = r#"{"name":"missingno","sprites":{"front_default":null},
            "types":[],"abilities":[],"stats":[]}"#;
        let pokemon = Pokemon::from_json(body.as_bytes()).unwrap();
        assert_eq!(pokemon.sprite_url, None);
    }

    #[test]
    fn test_missing_stats_is_transport_error() {
        let body = r#"{"name":"pikachu","sprites":{"front_default":null},
            "types":[],"abilities":[]}"#;
        match Pokemon::from_json(body.as_bytes()) {
            Err(LookupError::Transport(msg)) => {
                assert!(msg.starts_with("malformed payload"), "{msg}");
                assert!(msg.contains("stats"), "{msg}");
            }
            other => panic!("Expected Transport error, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_field_type_is_transport_error() {
        let body = r#"{"name":"pikachu","sprites":{"front_default":null},
            "types":[],"abilities":[],
            "stats":[{"base_stat":"high","stat":{"name":"hp"}}]}"#;
        assert!(matches!(
            Pokemon::from_json(body.as_bytes()),
            Err(LookupError::Transport(_))
        ));
    }

    #[test]
    fn test_not_json_is_transport_error() {
        assert!(matches!(
            Pokemon::from_json(b"<html>gateway</html>"),
            Err(LookupError::Transport(_))
        ));
    }
}
