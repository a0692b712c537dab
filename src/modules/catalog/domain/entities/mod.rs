mod account;
mod assets;
mod company;
mod configuration;
mod credit;
mod episode;
mod genre;
mod media;
mod movie;
mod person;
mod season;
mod show;

pub use account::{Account, AccountStates};
pub use assets::{Image, Images, Review, Video, VideoList};
pub use company::Company;
pub use configuration::{Configuration, ImageConfiguration};
pub use credit::{
    is_acting_credit, CastCredit, Credit, CreditType, Credits, CrewCredit, Filmography,
};
pub use episode::Episode;
pub use genre::{Genre, GenreList};
pub use media::{ItemKey, Media, MediaItem, MediaRecord, SearchResult};
pub use movie::Movie;
pub use person::Person;
pub use season::Season;
pub use show::Show;
