use async_graphql::SimpleObject;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, SimpleObject)]
pub struct Genre {
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

/// Body of `/genre/{type}/list`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenreList {
    #[serde(default)]
    pub genres: Vec<Genre>,
}

impl GenreList {
    /// Resolve `ids` in input order; unknown ids are dropped
    pub fn resolve(&self, ids: &[u64]) -> Vec<Genre> {
        ids.iter()
            .filter_map(|id| self.genres.iter().find(|genre| genre.id == *id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list() -> GenreList {
        GenreList {
            genres: vec![
                Genre { id: 28, name: "Action".to_string() },
                Genre { id: 12, name: "Adventure".to_string() },
                Genre { id: 18, name: "Drama".to_string() },
            ],
        }
    }

    #[test]
    fn keeps_input_order_and_drops_unknown_ids() {
        let genres = list().resolve(&[18, 999, 28]);
        let ids: Vec<_> = genres.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![18, 28]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(list().resolve(&[]).is_empty());
    }
}
