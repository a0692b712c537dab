use async_graphql::{Enum, SimpleObject, Union};
use serde::Deserialize;
use serde_json::Value;

use super::{Media, Person};
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum CreditType {
    Cast,
    Crew,
}

/// A credit is either an acting role or a crew job
#[derive(Debug, Clone, Deserialize, Union)]
#[serde(try_from = "Value")]
pub enum Credit {
    Cast(CastCredit),
    Crew(CrewCredit),
}

/// An acting role. Depending on where the credit came from it carries the
/// person (media credits) or the media (person credits).
#[derive(Debug, Clone, Deserialize, SimpleObject)]
#[serde(try_from = "Value")]
#[graphql(complex)]
pub struct CastCredit {
    pub id: String,
    pub character: Option<String>,
    pub order: Option<u32>,
    pub episode_count: Option<u32>,
    #[graphql(skip)]
    pub person: Option<Box<Person>>,
    #[graphql(skip)]
    pub media: Option<Box<Media>>,
}

#[derive(Debug, Clone, Deserialize, SimpleObject)]
#[serde(try_from = "Value")]
#[graphql(complex)]
pub struct CrewCredit {
    pub id: String,
    pub job: Option<String>,
    pub department: Option<String>,
    pub episode_count: Option<u32>,
    #[graphql(skip)]
    pub person: Option<Box<Person>>,
    #[graphql(skip)]
    pub media: Option<Box<Media>>,
}

/// Credit fields shared by every upstream credit shape
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreditEntry {
    credit_id: Option<String>,
    character: Option<String>,
    order: Option<u32>,
    job: Option<String>,
    department: Option<String>,
    episode_count: Option<u32>,
}

/// Cast/crew discriminator.
///
/// A non-empty `job` decides alone; otherwise `department` decides; a credit
/// with neither is an acting credit.
pub fn is_acting_credit(job: Option<&str>, department: Option<&str>) -> bool {
    let starts_with_act = |s: &str| {
        s.get(..3)
            .map(|prefix| prefix.eq_ignore_ascii_case("act"))
            .unwrap_or(false)
    };
    let present = |s: &&str| !s.trim().is_empty();

    match (job.filter(present), department.filter(present)) {
        (Some(job), _) => starts_with_act(job.trim()),
        (None, Some(department)) => starts_with_act(department.trim()),
        (None, None) => true,
    }
}

fn parse_entry(value: &Value) -> AppResult<CreditEntry> {
    if !value.is_object() {
        return Err(AppError::Serialization(format!(
            "credit must be an object, got {}",
            value
        )));
    }
    Ok(serde_json::from_value(value.clone())?)
}

/// The other side of the credit: media when tagged with `mediaType`, else a person
fn subject(value: Value) -> (Option<Box<Person>>, Option<Box<Media>>) {
    if value.get("mediaType").is_some() {
        (None, Media::try_from(value).ok().map(Box::new))
    } else {
        (serde_json::from_value(value).ok().map(Box::new), None)
    }
}

fn credit_id(entry: &CreditEntry, value: &Value) -> String {
    entry
        .credit_id
        .clone()
        .or_else(|| value.get("id").map(|id| id.to_string()))
        .unwrap_or_default()
}

impl TryFrom<Value> for CastCredit {
    type Error = AppError;

    fn try_from(value: Value) -> AppResult<Self> {
        let entry = parse_entry(&value)?;
        let id = credit_id(&entry, &value);
        let (person, media) = subject(value);
        Ok(Self {
            id,
            character: entry.character,
            order: entry.order,
            episode_count: entry.episode_count,
            person,
            media,
        })
    }
}

impl TryFrom<Value> for CrewCredit {
    type Error = AppError;

    fn try_from(value: Value) -> AppResult<Self> {
        let entry = parse_entry(&value)?;
        let id = credit_id(&entry, &value);
        let (person, media) = subject(value);
        Ok(Self {
            id,
            job: entry.job,
            department: entry.department,
            episode_count: entry.episode_count,
            person,
            media,
        })
    }
}

impl TryFrom<Value> for Credit {
    type Error = AppError;

    fn try_from(value: Value) -> AppResult<Self> {
        let entry = parse_entry(&value)?;
        if is_acting_credit(entry.job.as_deref(), entry.department.as_deref()) {
            CastCredit::try_from(value).map(Credit::Cast)
        } else {
            CrewCredit::try_from(value).map(Credit::Crew)
        }
    }
}

/// Raw `credits` / `combined_credits` body
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCredits {
    #[serde(default)]
    cast: Vec<Value>,
    #[serde(default)]
    crew: Vec<Value>,
    #[serde(default)]
    guest_stars: Vec<Value>,
}

/// Credits sub-resource, discriminated once when it is deserialized
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(try_from = "RawCredits")]
pub struct Credits {
    entries: Vec<Credit>,
    guest_stars: Vec<CastCredit>,
}

impl TryFrom<RawCredits> for Credits {
    type Error = AppError;

    fn try_from(raw: RawCredits) -> AppResult<Self> {
        let entries = raw
            .cast
            .into_iter()
            .chain(raw.crew)
            .map(Credit::try_from)
            .collect::<AppResult<Vec<_>>>()?;
        let guest_stars = raw
            .guest_stars
            .into_iter()
            .map(CastCredit::try_from)
            .collect::<AppResult<Vec<_>>>()?;
        Ok(Self {
            entries,
            guest_stars,
        })
    }
}

impl Credits {
    pub fn entries(&self) -> &[Credit] {
        &self.entries
    }

    pub fn cast(&self) -> impl Iterator<Item = &CastCredit> {
        self.entries.iter().filter_map(|credit| match credit {
            Credit::Cast(cast) => Some(cast),
            Credit::Crew(_) => None,
        })
    }

    pub fn crew(&self) -> impl Iterator<Item = &CrewCredit> {
        self.entries.iter().filter_map(|credit| match credit {
            Credit::Crew(crew) => Some(crew),
            Credit::Cast(_) => None,
        })
    }

    pub fn guest_stars(&self) -> &[CastCredit] {
        &self.guest_stars
    }
}

/// A person's credits split by kind
#[derive(Debug, Clone, Default, SimpleObject)]
pub struct Filmography {
    pub cast: Vec<CastCredit>,
    pub crew: Vec<CrewCredit>,
}

impl From<&Credits> for Filmography {
    fn from(credits: &Credits) -> Self {
        Self {
            cast: credits.cast().cloned().collect(),
            crew: credits.crew().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn actor_job_is_cast() {
        let credit = Credit::try_from(json!({
            "creditId": "c1",
            "job": "Actor",
            "name": "Sigourney Weaver"
        }))
        .unwrap();
        assert!(matches!(credit, Credit::Cast(_)));
    }

    #[test]
    fn null_job_with_directing_department_is_crew() {
        let credit = Credit::try_from(json!({
            "creditId": "c2",
            "job": null,
            "department": "Directing",
            "name": "Ridley Scott"
        }))
        .unwrap();
        match credit {
            Credit::Crew(crew) => assert_eq!(crew.department.as_deref(), Some("Directing")),
            Credit::Cast(_) => panic!("expected a crew credit"),
        }
    }

    #[test]
    fn job_takes_precedence_over_department() {
        assert!(!is_acting_credit(Some("Director"), Some("Acting")));
        assert!(is_acting_credit(Some("acting double"), Some("Crew")));
        assert!(is_acting_credit(None, Some("Acting")));
        assert!(is_acting_credit(None, None));
        assert!(is_acting_credit(Some(""), None));
    }

    #[test]
    fn media_credits_carry_the_person() {
        let credits: Credits = serde_json::from_value(json!({
            "cast": [{
                "id": 10205, "creditId": "c1", "name": "Sigourney Weaver",
                "character": "Ripley", "order": 0
            }],
            "crew": [{
                "id": 578, "creditId": "c2", "name": "Ridley Scott",
                "job": "Director", "department": "Directing"
            }]
        }))
        .unwrap();

        let cast: Vec<_> = credits.cast().collect();
        assert_eq!(cast.len(), 1);
        assert_eq!(cast[0].id, "c1");
        assert_eq!(cast[0].person.as_ref().map(|p| p.name.as_str()), Some("Sigourney Weaver"));
        assert!(cast[0].media.is_none());
        assert_eq!(credits.crew().count(), 1);
    }

    #[test]
    fn person_credits_carry_the_media() {
        let credits: Credits = serde_json::from_value(json!({
            "cast": [{
                "id": 348, "creditId": "c3", "mediaType": "movie",
                "title": "Alien", "character": "Ripley"
            }],
            "crew": []
        }))
        .unwrap();

        let cast: Vec<_> = credits.cast().collect();
        assert!(matches!(
            cast[0].media.as_deref(),
            Some(Media::Movie(movie)) if movie.title == "Alien"
        ));
        assert!(cast[0].person.is_none());
    }
}
