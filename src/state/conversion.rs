


use futures::TryStreamExt;
use log::warn;
use mongodb::bson::{doc, Document};
use mongodb::options::FindOptions;
use mongodb::Collection;

use crate::constants::{StateResult, CONVERSIONS_COLLECTION};
use crate::errors::StateError;
use crate::schemas::conversion::Conversion;
use super::State;



impl State{

    fn conversions(&self) -> Collection<Conversion>{
        self.collection::<Conversion>(CONVERSIONS_COLLECTION)
    }

    /// adds a new conversion to the state if it does not exist yet
    pub async fn add_conversion(&self, conversion: &Conversion) -> StateResult<()>{
        if self.has_conversion(&conversion._id).await{
            return Err(StateError::AlreadyExists);
        }
        match self.set_conversion(conversion).await{
            // two racing inserts can both pass the lookup above; the unique
            // `_id` index inside the collection settles the winner
            Err(err) if err.is_duplicate_key() => Err(StateError::AlreadyExists),
            other => other,
        }
    }

    /// inserts a new conversion into the state without any checks
    pub async fn set_conversion(&self, conversion: &Conversion) -> StateResult<()>{
        self.conversions().insert_one(conversion, None).await?;
        Ok(())
    }

    /// checks whether a conversion with this identifier is currently
    /// retrievable; any lookup failure counts as absent
    pub async fn has_conversion(&self, id: &str) -> bool{
        match self.get_conversion(id).await{
            Ok(_) => true,
            Err(StateError::NotFound) => false,
            Err(err) => {
                // a transient failure here lets a later dedup insert go through
                warn!("conversion {} lookup failed, counting it as absent: {}", id, err);
                false
            },
        }
    }

    /// gets a conversion from the state by its identifier
    pub async fn get_conversion(&self, id: &str) -> StateResult<Conversion>{
        match self.conversions().find_one(doc!{"_id": id}, None).await?{
            Some(conversion) => Ok(conversion),
            None => Err(StateError::NotFound),
        }
    }

    /// returns every conversion inside the state in collection order
    pub async fn list_conversions(&self) -> StateResult<Vec<Conversion>>{
        let mut cursor = self.conversions().find(None, None).await?;
        let mut conversions = Vec::new();
        while let Some(conversion) = cursor.try_next().await?{
            conversions.push(conversion);
        }
        Ok(conversions)
    }

    /// finds conversions matching the passed in document query; a `None` query
    /// matches everything, `offset` and `limit` go to the cursor untouched and
    /// no sort order is imposed on top of the collection's own
    pub async fn search_conversions(&self, query: impl Into<Option<Document>>, limit: i64, offset: u64) -> StateResult<Vec<Conversion>>{
        let find_options = FindOptions::builder()
            .skip(offset)
            .limit(limit)
            .build();
        let mut cursor = self.conversions().find(query, find_options).await?;
        let mut conversions = Vec::new();
        while let Some(conversion) = cursor.try_next().await?{
            conversions.push(conversion);
        }
        Ok(conversions)
    }

}
