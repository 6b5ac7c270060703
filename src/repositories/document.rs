// src/repositories/document.rs
//
// The storable-entity contract: a collection name plus id access.
// Ids are opaque strings assigned by the store on first insert; an empty
// id means "not yet inserted".

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::{Genre, Movie, Rating, Streaming, User};

pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync {
    const COLLECTION: &'static str;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
}

impl Document for Genre {
    const COLLECTION: &'static str = "genres";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Document for Streaming {
    const COLLECTION: &'static str = "streamings";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Document for Movie {
    const COLLECTION: &'static str = "movies";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Document for Rating {
    const COLLECTION: &'static str = "ratings";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Document for User {
    const COLLECTION: &'static str = "users";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
