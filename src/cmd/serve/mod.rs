// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod handlers;
mod response;
pub mod server;

#[cfg(test)]
mod tests {
    use std::error::Error;

    use flashcards_core::Card;
    use flashcards_core::Folder;
    use flashcards_core::Page;
    use portpicker::pick_unused_port;
    use reqwest::Client;
    use reqwest::StatusCode;
    use serde_json::Value;
    use serde_json::json;
    use tempfile::tempdir;
    use tokio::spawn;

    use crate::cmd::serve::server::start_server;
    use crate::config::ServerConfig;
    use crate::db::Database;
    use crate::helper::TEST_HOST;
    use crate::helper::spawn_test_server;
    use crate::helper::wait_for_server;

    type TestResult = Result<(), Box<dyn Error>>;

    async fn create_folder(
        client: &Client,
        base: &str,
        name: &str,
    ) -> Result<Folder, Box<dyn Error>> {
        let response = client
            .post(format!("{base}/api/folders"))
            .json(&json!({ "name": name }))
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::CREATED);
        Ok(response.json().await?)
    }

    #[tokio::test]
    async fn test_card_crud() -> TestResult {
        let base = spawn_test_server().await?;
        let client = Client::new();
        let folder = create_folder(&client, &base, "Math").await?;

        // Create.
        let response = client
            .post(format!("{base}/api/folders/{}/cards", folder.id))
            .json(&json!({ "question": "2+2?", "answer": "4" }))
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::CREATED);
        let card: Card = response.json().await?;
        assert_eq!(card.question, "2+2?");
        assert_eq!(card.answer, "4");
        assert_eq!(card.folder_id, folder.id);

        // Read.
        let url = format!("{base}/api/folders/{}/cards/{}", folder.id, card.id);
        let response = client.get(&url).send().await?;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.json::<Card>().await?, card);

        // Update.
        let response = client
            .put(&url)
            .json(&json!({ "question": "2+3?", "answer": "5" }))
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::OK);
        let updated: Card = response.json().await?;
        assert_eq!(updated.id, card.id);
        assert_eq!(updated.question, "2+3?");
        assert_eq!(updated.answer, "5");

        // Delete.
        let response = client.delete(&url).send().await?;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let response = client.get(&url).send().await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = response.json().await?;
        assert_eq!(
            body["message"],
            format!("Card with id {} not found in folder {}", card.id, folder.id)
        );
        assert_eq!(body["status"], 404);
        Ok(())
    }

    #[tokio::test]
    async fn test_blank_question_rejected() -> TestResult {
        let base = spawn_test_server().await?;
        let client = Client::new();
        let folder = create_folder(&client, &base, "Math").await?;
        let response = client
            .post(format!("{base}/api/folders/{}/cards", folder.id))
            .json(&json!({ "question": "", "answer": "4" }))
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = response.json().await?;
        assert_eq!(body["message"], "❌question can't be blanked!");
        assert_eq!(body["status"], 400);
        assert_eq!(
            body["errors"],
            json!([{ "field": "question", "message": "❌question can't be blanked!" }])
        );

        // Nothing reached the store.
        let response = client
            .get(format!("{base}/api/folders/{}/cards", folder.id))
            .send()
            .await?;
        let page: Page<Card> = response.json().await?;
        assert_eq!(page.total_elements, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_null_question_rejected() -> TestResult {
        let base = spawn_test_server().await?;
        let client = Client::new();
        let folder = create_folder(&client, &base, "Math").await?;
        let response = client
            .post(format!("{base}/api/folders/{}/cards", folder.id))
            .json(&json!({ "question": null, "answer": "4" }))
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = response.json().await?;
        assert_eq!(body["message"], "❌question can't be blanked!");
        assert_eq!(
            body["errors"],
            json!([{ "field": "question", "message": "❌question can't be blanked!" }])
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_page_past_end_is_empty() -> TestResult {
        let base = spawn_test_server().await?;
        let client = Client::new();
        let folder = create_folder(&client, &base, "Math").await?;
        client
            .post(format!("{base}/api/folders/{}/cards", folder.id))
            .json(&json!({ "question": "2+2?", "answer": "4" }))
            .send()
            .await?;
        let response = client
            .get(format!(
                "{base}/api/folders/{}/cards?page=18446744073709551615&size=1",
                folder.id
            ))
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = response.json().await?;
        assert_eq!(body["content"], json!([]));
        assert_eq!(body["totalElements"], 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_blank_fields_on_update_rejected() -> TestResult {
        let base = spawn_test_server().await?;
        let client = Client::new();
        let folder = create_folder(&client, &base, "Math").await?;
        let response = client
            .post(format!("{base}/api/folders/{}/cards", folder.id))
            .json(&json!({ "question": "2+2?", "answer": "4" }))
            .send()
            .await?;
        let card: Card = response.json().await?;

        let url = format!("{base}/api/folders/{}/cards/{}", folder.id, card.id);
        let response = client
            .put(&url)
            .json(&json!({ "question": "   " }))
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = response.json().await?;
        assert_eq!(body["errors"][0]["message"], "❌question can't be blanked!");
        assert_eq!(body["errors"][1]["message"], "❌answer can't be blanked!");

        // The card is unchanged.
        let unchanged: Card = client.get(&url).send().await?.json().await?;
        assert_eq!(unchanged, card);
        Ok(())
    }

    #[tokio::test]
    async fn test_folders_and_pagination() -> TestResult {
        let base = spawn_test_server().await?;
        let client = Client::new();
        let folder = create_folder(&client, &base, "Capitals").await?;
        for (question, answer) in [("France?", "Paris"), ("Peru?", "Lima"), ("Japan?", "Tokyo")] {
            let response = client
                .post(format!("{base}/api/folders/{}/cards", folder.id))
                .json(&json!({ "question": question, "answer": answer }))
                .send()
                .await?;
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = client
            .get(format!("{base}/api/folders/{}/cards?page=1&size=2", folder.id))
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = response.json().await?;
        assert_eq!(body["totalElements"], 3);
        assert_eq!(body["totalPages"], 2);
        assert_eq!(body["number"], 1);
        assert_eq!(body["content"][0]["question"], "Japan?");

        let folders: Vec<Folder> = client
            .get(format!("{base}/api/folders"))
            .send()
            .await?
            .json()
            .await?;
        assert_eq!(folders, vec![folder.clone()]);

        // Deleting the folder takes its cards with it.
        let response = client
            .delete(format!("{base}/api/folders/{}", folder.id))
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let response = client
            .get(format!("{base}/api/folders/{}/cards", folder.id))
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = response.json().await?;
        assert_eq!(
            body["message"],
            format!("Folder with id {} not found", folder.id)
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_blank_folder_name_rejected() -> TestResult {
        let base = spawn_test_server().await?;
        let response = Client::new()
            .post(format!("{base}/api/folders"))
            .json(&json!({ "name": "" }))
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = response.json().await?;
        assert_eq!(body["message"], "❌name can't be blanked!");
        Ok(())
    }

    #[tokio::test]
    async fn test_card_in_missing_folder() -> TestResult {
        let base = spawn_test_server().await?;
        let response = Client::new()
            .post(format!("{base}/api/folders/404/cards"))
            .json(&json!({ "question": "q", "answer": "a" }))
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = response.json().await?;
        assert_eq!(body["message"], "Folder with id 404 not found");
        Ok(())
    }

    #[tokio::test]
    async fn test_not_found_fallback() -> TestResult {
        let base = spawn_test_server().await?;
        let response = reqwest::get(format!("{base}/herp-derp")).await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = response.json().await?;
        assert_eq!(body, json!({ "message": "Not Found", "status": 404 }));
        Ok(())
    }

    #[tokio::test]
    async fn test_cards_persist_to_database_file() -> TestResult {
        let dir = tempdir()?;
        let path = dir.path().join("cards.db").display().to_string();
        let port = pick_unused_port().expect("no free port");
        let config = ServerConfig {
            host: TEST_HOST.to_string(),
            port,
            database: path.clone(),
        };
        spawn(async move { start_server(config).await });
        wait_for_server(TEST_HOST, port).await?;

        let base = format!("http://{TEST_HOST}:{port}");
        let client = Client::new();
        let folder = create_folder(&client, &base, "Saved").await?;
        let response = client
            .post(format!("{base}/api/folders/{}/cards", folder.id))
            .json(&json!({ "question": "2+2?", "answer": "4" }))
            .send()
            .await?;
        let card: Card = response.json().await?;

        let db = Database::open(&path)?;
        assert_eq!(db.get_card(folder.id, card.id)?, Some(card));
        Ok(())
    }
}
