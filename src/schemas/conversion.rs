


use serde::{Serialize, Deserialize};



/*
  ----------------------------------------------------------------------------------------------
| this struct will be used to serialize and deserialize conversion docs inside the conversions collection
| ----------------------------------------------------------------------------------------------
|
|
*/
// - advertiser_data keeps the postback private data (customer id, goal id, comment and
//   other fields relevant to the postback), encrypted for the advertiser; never decrypted here
// - public_data keeps the provable transaction metadata (offer id, stream id, account id
//   and the affiliate public key), encrypted by a fixed-output hash scheme; same opacity
// - created_at is caller supplied seconds, the store never touches a clock
// - status is one of PENDING, APPROVED or DECLINED by convention and persisted verbatim
#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Conversion{
    pub _id: String,
    pub affiliate_account_id: String,
    pub advertiser_data: String,
    pub public_data: String,
    pub created_at: f64,
    pub status: String,
}



#[cfg(test)]
mod tests{

    use super::*;
    use mongodb::bson;
    use crate::constants::PENDING_STATUS;

    fn sample() -> Conversion{
        Conversion{
            _id: "c1".to_string(),
            affiliate_account_id: "aff1".to_string(),
            advertiser_data: "<opaque advertiser blob>".to_string(),
            public_data: "<opaque public blob>".to_string(),
            created_at: 1000.0,
            status: PENDING_STATUS.to_string(),
        }
    }

    // the on-disk field names are a persisted-schema contract shared with
    // co-located readers of the collection; they must never drift
    #[test]
    fn bson_field_names_match_the_stored_schema(){
        let doc = bson::to_document(&sample()).unwrap();
        assert_eq!(doc.get_str("_id").unwrap(), "c1");
        assert_eq!(doc.get_str("affiliate_account_id").unwrap(), "aff1");
        assert_eq!(doc.get_str("advertiser_data").unwrap(), "<opaque advertiser blob>");
        assert_eq!(doc.get_str("public_data").unwrap(), "<opaque public blob>");
        assert_eq!(doc.get_f64("created_at").unwrap(), 1000.0);
        assert_eq!(doc.get_str("status").unwrap(), "PENDING");
        assert_eq!(doc.len(), 6);
    }

    #[test]
    fn bson_round_trip_keeps_every_field(){
        let conversion = sample();
        let doc = bson::to_document(&conversion).unwrap();
        let decoded: Conversion = bson::from_document(doc).unwrap();
        assert_eq!(decoded, conversion);
    }

    #[test]
    fn json_field_names_match_the_stored_schema(){
        let value = serde_json::to_value(&sample()).unwrap();
        assert_eq!(value["_id"], "c1");
        assert_eq!(value["affiliate_account_id"], "aff1");
        assert_eq!(value["created_at"], 1000.0);
        assert_eq!(value["status"], "PENDING");
    }

}
