


pub mod conversion;

use mongodb::{Collection, Database};



// the state is a stateless facade around the underlying document database;
// the handle is injected at construction and every guarantee about
// durability, indexing and consistency is the collection's, not ours
#[derive(Clone)]
pub struct State{
    pub db: Database,
}

impl State{

    pub fn new(db: Database) -> State{
        State{
            db,
        }
    }

    pub fn collection<T>(&self, name: &str) -> Collection<T>{
        self.db.collection::<T>(name)
    }

}
