

use std::env;

use chrono::Local;
use log::info;
use mongodb::{Client, Database};
use uuid::Uuid;

use crate::constants::StateResult;



/*  ----------------------
   | shared state storage
   |----------------------
   | mongodb
   |
*/


#[derive(Clone, Debug)]
pub struct Db{
    pub mode: Mode,
    pub engine: Option<String>,
    pub url: Option<String>,
    pub instance: Option<Client>,
}

impl Default for Db{
    fn default() -> Db{
        Db{
            mode: Mode::Off,
            engine: None,
            url: None,
            instance: None,
        }
    }
}

impl Db{

    // the client connects lazily, building it does no io; it holds its own
    // connection pool internally so one instance is shared for the whole app
    pub async fn new(engine: &str, url: &str) -> StateResult<Db>{
        let instance = Client::with_uri_str(url).await?;
        Ok(
            Db{
                mode: Mode::On,
                engine: Some(engine.to_string()),
                url: Some(url.to_string()),
                instance: Some(instance),
            }
        )
    }

}



#[derive(Clone, Debug)]
pub struct Storage{
    pub id: Uuid,
    pub db: Option<Db>,
}

impl Storage{

    /// builds the storage from the process environment; dev environments get an
    /// unauthenticated url, everything else takes the credentials from the env
    pub async fn from_env() -> StateResult<Storage>{
        let db_engine = env::var("DB_ENGINE").expect("⚠️ no db engine variable set");
        let db_host = env::var("DB_HOST").expect("⚠️ no db host variable set");
        let db_port = env::var("DB_PORT").expect("⚠️ no db port variable set");
        let environment = env::var("ENVIRONMENT").unwrap_or("dev".to_string());
        let db_addr = if environment == "dev"{
            format!("{}://{}:{}", db_engine, db_host, db_port)
        } else{
            let db_username = env::var("DB_USERNAME").expect("⚠️ no db username variable set");
            let db_password = env::var("DB_PASSWORD").expect("⚠️ no db password variable set");
            format!("{}://{}:{}@{}:{}", db_engine, db_username, db_password, db_host, db_port)
        };
        info!("➔ 🛢️ switching to {} on address: [{}:{}] - {}", db_engine, db_host, db_port, Local::now().naive_local());
        let db = Db::new(&db_engine, &db_addr).await?;
        Ok(
            Storage{
                id: Uuid::new_v4(),
                db: Some(db),
            }
        )
    }

    pub fn get_db(&self) -> Option<&Client>{
        match self.db.as_ref()?.mode{
            Mode::On => self.db.as_ref()?.instance.as_ref(),
            Mode::Off => None,
        }
    }

    /// a named database handle off of the shared client, for injecting into `State`
    pub fn database(&self, name: &str) -> Option<Database>{
        self.get_db().map(|client| client.database(name))
    }

}



#[derive(Copy, Clone, Debug)]
pub enum Mode{
    On,
    Off,
}
