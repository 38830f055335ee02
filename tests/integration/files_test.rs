//! Integration tests for the file read endpoints.

use axum::http::StatusCode;
use serde_json::json;

use fileshelf_core::types::{FileId, UserId};
use fileshelf_entity::file::{FileDocument, FileKind, ParentRef};

use crate::helpers::{TestApp, names};

// ── GET /files/{id} ──────────────────────────────────────────

#[tokio::test]
async fn test_get_own_file() {
    let app = TestApp::new().await;
    let owner = UserId::random();
    let token = app.sign_in(owner).await;
    let doc = app.insert_file(owner, ParentRef::Root, "notes.txt").await;

    let response = app.get(&format!("/files/{}", doc.id), Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "id": doc.id.to_string(),
            "userId": owner.to_string(),
            "name": "notes.txt",
            "type": "file",
            "isPublic": false,
            "parentId": "0",
        })
    );
}

#[tokio::test]
async fn test_get_without_token_is_unauthorized() {
    let app = TestApp::new().await;
    let owner = UserId::random();
    let doc = app.insert_file(owner, ParentRef::Root, "notes.txt").await;

    let response = app.get(&format!("/files/{}", doc.id), None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body,
        json!({ "error": "Unauthorized" })
    );
}

#[tokio::test]
async fn test_get_with_unknown_token_is_unauthorized() {
    let app = TestApp::new().await;
    let response = app
        .get(&format!("/files/{}", FileId::random()), Some("expired"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_bound_to_malformed_user_is_unauthorized() {
    let app = TestApp::new().await;
    app.bind_token("legacy", "admin").await;

    let response = app.get("/files", Some("legacy")).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_header_is_case_insensitive() {
    let app = TestApp::new().await;
    let owner = UserId::random();
    let token = app.sign_in(owner).await;
    let doc = app.insert_file(owner, ParentRef::Root, "a").await;

    let response = app
        .get_with_header(&format!("/files/{}", doc.id), Some(("X-Token", token.as_str())))
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_get_malformed_id_is_not_found() {
    let app = TestApp::new().await;
    let token = app.sign_in(UserId::random()).await;

    for id in ["abc", "0", "5f1e9b2c3d4a5b6c7d8e9f0z", "5f1e9b2c3d4a5b6c7d8e9f0011"] {
        let response = app.get(&format!("/files/{id}"), Some(&token)).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "id {id}");
        assert_eq!(
            response.body,
            json!({ "error": "Not found" })
        );
    }
}

#[tokio::test]
async fn test_get_foreign_file_is_not_found() {
    let app = TestApp::new().await;
    let owner = UserId::random();
    let intruder = UserId::random();
    let doc = app.insert_file(owner, ParentRef::Root, "private").await;
    let token = app.sign_in(intruder).await;

    let response = app.get(&format!("/files/{}", doc.id), Some(&token)).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_undecodable_id_is_not_found_after_auth() {
    let app = TestApp::new().await;
    let token = app.sign_in(UserId::random()).await;

    let authed = app.get("/files/%FF", Some(&token)).await;
    assert_eq!(authed.status, StatusCode::NOT_FOUND);
    assert_eq!(authed.body, json!({ "error": "Not found" }));

    let anonymous = app.get("/files/%FF", None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
    assert_eq!(anonymous.body, json!({ "error": "Unauthorized" }));
}

#[tokio::test]
async fn test_get_returns_stored_fields_verbatim() {
    let app = TestApp::new().await;
    let owner = UserId::random();
    let token = app.sign_in(owner).await;
    let mut extra = serde_json::Map::new();
    extra.insert("localPath".to_string(), json!("/tmp/files_manager/3f2a"));
    let doc = app
        .store(FileDocument {
            id: FileId::random(),
            user_id: owner,
            name: "clip.mov".to_string(),
            kind: FileKind::Other("video".to_string()),
            is_public: true,
            parent_id: ParentRef::Root,
            extra,
        })
        .await;

    let response = app.get(&format!("/files/{}", doc.id), Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["type"], "video");
    assert_eq!(response.body["localPath"], "/tmp/files_manager/3f2a");
}

// ── GET /files ───────────────────────────────────────────────

#[tokio::test]
async fn test_list_pages_of_twenty() {
    let app = TestApp::new().await;
    let owner = UserId::random();
    let token = app.sign_in(owner).await;
    let mut expected = Vec::new();
    for i in 0..25 {
        let doc = app
            .insert_file(owner, ParentRef::Root, &format!("file-{i:02}"))
            .await;
        expected.push(doc.name);
    }

    let first = app.get("/files?parentId=0&page=0", Some(&token)).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(names(&first.body), expected[..20]);

    let second = app.get("/files?parentId=0&page=1", Some(&token)).await;
    assert_eq!(names(&second.body), expected[20..]);

    let third = app.get("/files?parentId=0&page=2", Some(&token)).await;
    assert_eq!(third.status, StatusCode::OK);
    assert_eq!(third.body, json!([]));
}

#[tokio::test]
async fn test_list_defaults_to_root_and_first_page() {
    let app = TestApp::new().await;
    let owner = UserId::random();
    let token = app.sign_in(owner).await;
    let folder = app.insert_folder(owner, ParentRef::Root, "docs").await;
    app.insert_file(owner, folder.id.into(), "inside").await;
    app.insert_file(owner, ParentRef::Root, "top").await;

    let implicit = app.get("/files", Some(&token)).await;
    let explicit = app.get("/files?parentId=0&page=0", Some(&token)).await;
    let garbage_page = app.get("/files?page=abc", Some(&token)).await;
    let empty_parent = app.get("/files?parentId=", Some(&token)).await;

    assert_eq!(implicit.status, StatusCode::OK);
    assert_eq!(names(&implicit.body), ["docs", "top"]);
    assert_eq!(implicit.body, explicit.body);
    assert_eq!(implicit.body, garbage_page.body);
    assert_eq!(implicit.body, empty_parent.body);
}

#[tokio::test]
async fn test_list_folder_children_only_for_owner() {
    let app = TestApp::new().await;
    let owner = UserId::random();
    let other = UserId::random();
    let folder = app.insert_folder(owner, ParentRef::Root, "docs").await;
    app.insert_file(owner, folder.id.into(), "mine").await;
    app.insert_file(other, folder.id.into(), "theirs").await;
    let token = app.sign_in(owner).await;

    let response = app
        .get(&format!("/files?parentId={}", folder.id), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(names(&response.body), ["mine"]);
    assert_eq!(response.body[0]["parentId"], folder.id.to_string());
}

#[tokio::test]
async fn test_list_unknown_parent_is_empty() {
    let app = TestApp::new().await;
    let token = app.sign_in(UserId::random()).await;

    let response = app
        .get(&format!("/files?parentId={}", FileId::random()), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_list_malformed_parent_is_bad_request() {
    let app = TestApp::new().await;
    let token = app.sign_in(UserId::random()).await;

    let response = app.get("/files?parentId=root", Some(&token)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({ "error": "Invalid parentId" })
    );
}

#[tokio::test]
async fn test_repeated_query_keys() {
    let app = TestApp::new().await;
    let owner = UserId::random();
    let token = app.sign_in(owner).await;
    for i in 0..21 {
        app.insert_file(owner, ParentRef::Root, &format!("file-{i:02}"))
            .await;
    }

    let anonymous = app.get("/files?page=1&page=2", None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
    assert_eq!(anonymous.body, json!({ "error": "Unauthorized" }));

    let paged = app.get("/files?page=1&page=2", Some(&token)).await;
    assert_eq!(paged.status, StatusCode::OK);
    assert_eq!(names(&paged.body), ["file-20"]);

    let doubled_parent = app.get("/files?parentId=0&parentId=0", Some(&token)).await;
    assert_eq!(doubled_parent.status, StatusCode::BAD_REQUEST);
    assert_eq!(doubled_parent.body, json!({ "error": "Invalid parentId" }));
}

#[tokio::test]
async fn test_list_without_token_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app.get("/files?parentId=root", None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
