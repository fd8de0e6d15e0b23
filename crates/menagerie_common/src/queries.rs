//! The three read-only list queries, one per endpoint.

use serde::{Deserialize, Serialize};

use crate::entities::{Client, DataDocument, Pet};
use crate::operation::{GraphqlOperation, ListQuery, NoVariables};

/// `allClients` on the clients endpoint.
pub struct AllClients;

/// `data` payload of [`AllClients`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AllClientsData {
    pub all_clients: Vec<Client>,
}

impl GraphqlOperation for AllClients {
    type Variables = NoVariables;
    type ResponseData = AllClientsData;

    const QUERY: &'static str = r"query AllClients {
  allClients {
    firstName
    lastName
    email
    isActive
    registeredAt
  }
}";
    const OPERATION_NAME: &'static str = "AllClients";
}

impl ListQuery for AllClients {
    type Item = Client;

    fn items(data: &AllClientsData) -> &[Client] {
        &data.all_clients
    }
}

/// `allPets` on the pets endpoint.
pub struct AllPets;

/// `data` payload of [`AllPets`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AllPetsData {
    pub all_pets: Vec<Pet>,
}

impl GraphqlOperation for AllPets {
    type Variables = NoVariables;
    type ResponseData = AllPetsData;

    const QUERY: &'static str = r"query AllPets {
  allPets {
    name
    species
    breed
    owner {
      firstName
      lastName
    }
  }
}";
    const OPERATION_NAME: &'static str = "AllPets";
}

impl ListQuery for AllPets {
    type Item = Pet;

    fn items(data: &AllPetsData) -> &[Pet] {
        &data.all_pets
    }
}

/// `allDataDocuments` on the documents endpoint.
pub struct AllDataDocuments;

/// `data` payload of [`AllDataDocuments`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AllDataDocumentsData {
    pub all_data_documents: Vec<DataDocument>,
}

impl GraphqlOperation for AllDataDocuments {
    type Variables = NoVariables;
    type ResponseData = AllDataDocumentsData;

    const QUERY: &'static str = r"query AllDataDocuments {
  allDataDocuments {
    title
    description
    createdAt
  }
}";
    const OPERATION_NAME: &'static str = "AllDataDocuments";
}

impl ListQuery for AllDataDocuments {
    type Item = DataDocument;

    fn items(data: &AllDataDocumentsData) -> &[DataDocument] {
        &data.all_data_documents
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_queries_select_rendered_fields() {
        for field in ["firstName", "lastName", "email", "isActive", "registeredAt"] {
            assert!(AllClients::QUERY.contains(field), "allClients misses {field}");
        }
        for field in ["name", "species", "breed", "owner"] {
            assert!(AllPets::QUERY.contains(field), "allPets misses {field}");
        }
        for field in ["title", "description", "createdAt"] {
            assert!(AllDataDocuments::QUERY.contains(field), "allDataDocuments misses {field}");
        }
    }

    #[test]
    fn test_all_clients_preserves_order() {
        let data: AllClientsData = serde_json::from_value(json!({
            "allClients": [
                { "firstName": "B", "lastName": "2", "email": "", "isActive": true, "registeredAt": "t2" },
                { "firstName": "A", "lastName": "1", "email": "", "isActive": true, "registeredAt": "t1" }
            ]
        }))
        .unwrap();

        let names: Vec<_> = AllClients::items(&data).iter().map(|c| c.first_name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn test_all_pets_empty_list() {
        let data: AllPetsData = serde_json::from_value(json!({ "allPets": [] })).unwrap();

        assert!(AllPets::items(&data).is_empty());
    }

    #[test]
    fn test_all_data_documents_items() {
        let data: AllDataDocumentsData = serde_json::from_value(json!({
            "allDataDocuments": [
                { "title": "Report", "description": "Quarterly", "createdAt": "2024-01-01" }
            ]
        }))
        .unwrap();

        assert_eq!(AllDataDocuments::items(&data)[0].title, "Report");
    }

    #[test]
    fn test_request_carries_operation_name() {
        let request = AllPets::request(&NoVariables::default()).unwrap();

        assert_eq!(request.operation_name.as_deref(), Some("AllPets"));
        assert_eq!(request.variables, json!({}));
    }
}
