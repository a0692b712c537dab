use async_graphql::{ComplexObject, Context, Result, ResultExt};

use super::media::known;
use crate::modules::catalog::domain::entities::{
    CastCredit, Credit, CreditType, Credits, CrewCredit, Filmography, Image, Media, Person,
};
use crate::modules::graph::context::sources;

impl Person {
    async fn detail<T, F>(&self, ctx: &Context<'_>, field: &Option<T>, pick: F) -> Result<Option<T>>
    where
        T: Clone,
        F: FnOnce(Person) -> Option<T>,
    {
        sources(ctx)?
            .catalog
            .person_field(self.id, known(field, self.detailed), |person| Some(pick(person)))
            .await
            .extend()
    }

    async fn combined(&self, ctx: &Context<'_>) -> Result<Credits> {
        sources(ctx)?
            .catalog
            .person_field(self.id, self.combined_credits.as_ref(), |person| {
                person.combined_credits
            })
            .await
            .extend()
    }
}

#[ComplexObject]
impl Person {
    /// Search hits carry `knownFor`; other records look the person up by name
    async fn known_for(&self, ctx: &Context<'_>) -> Result<Vec<Media>> {
        if let Some(known_for) = &self.known_for {
            return Ok(known_for.clone());
        }
        sources(ctx)?
            .catalog
            .find_known_for(self.id, &self.name)
            .await
            .extend()
    }

    async fn filmography(&self, ctx: &Context<'_>) -> Result<Filmography> {
        Ok(Filmography::from(&self.combined(ctx).await?))
    }

    /// Every credit, acting and crew, in upstream order
    async fn credits(&self, ctx: &Context<'_>) -> Result<Vec<Credit>> {
        Ok(self.combined(ctx).await?.entries().to_vec())
    }

    async fn profiles(&self, ctx: &Context<'_>) -> Result<Vec<Image>> {
        let images = sources(ctx)?
            .catalog
            .person_field(self.id, self.images.as_ref(), |person| person.images)
            .await
            .extend()?;
        Ok(images.profiles)
    }

    async fn known_for_department(&self, ctx: &Context<'_>) -> Result<Option<String>> {
        self.detail(ctx, &self.known_for_department, |p| p.known_for_department).await
    }

    async fn biography(&self, ctx: &Context<'_>) -> Result<Option<String>> {
        self.detail(ctx, &self.biography, |p| p.biography).await
    }

    async fn birthday(&self, ctx: &Context<'_>) -> Result<Option<String>> {
        self.detail(ctx, &self.birthday, |p| p.birthday).await
    }

    async fn deathday(&self, ctx: &Context<'_>) -> Result<Option<String>> {
        self.detail(ctx, &self.deathday, |p| p.deathday).await
    }

    async fn place_of_birth(&self, ctx: &Context<'_>) -> Result<Option<String>> {
        self.detail(ctx, &self.place_of_birth, |p| p.place_of_birth).await
    }

    async fn homepage(&self, ctx: &Context<'_>) -> Result<Option<String>> {
        self.detail(ctx, &self.homepage, |p| p.homepage).await
    }

    async fn imdb_id(&self, ctx: &Context<'_>) -> Result<Option<String>> {
        self.detail(ctx, &self.imdb_id, |p| p.imdb_id).await
    }

    async fn also_known_as(&self, ctx: &Context<'_>) -> Result<Vec<String>> {
        Ok(self
            .detail(ctx, &self.also_known_as, |p| p.also_known_as)
            .await?
            .unwrap_or_default())
    }
}

#[ComplexObject]
impl CastCredit {
    async fn credit_type(&self) -> CreditType {
        CreditType::Cast
    }

    /// Set on credits listed under a movie, show, season or episode
    async fn person(&self) -> Option<Person> {
        self.person.as_deref().cloned()
    }

    /// Set on credits listed under a person
    async fn media(&self) -> Option<Media> {
        self.media.as_deref().cloned()
    }
}

#[ComplexObject]
impl CrewCredit {
    async fn credit_type(&self) -> CreditType {
        CreditType::Crew
    }

    async fn person(&self) -> Option<Person> {
        self.person.as_deref().cloned()
    }

    async fn media(&self) -> Option<Media> {
        self.media.as_deref().cloned()
    }
}
