//! Integration tests for the comment repository.

use blog_db::models::comment::CreateComment;
use blog_db::models::entry::{CreateEntry, Entry};
use blog_db::models::user::CreateUser;
use blog_db::repositories::{CommentRepo, EntryRepo, UserRepo};
use sqlx::PgPool;

async fn entry(pool: &PgPool) -> Entry {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: "some_user".to_string(),
            email: String::new(),
        },
    )
    .await
    .unwrap();
    EntryRepo::create(
        pool,
        &CreateEntry {
            title: "title1".to_string(),
            body: "body1".to_string(),
            author_id: user.id,
        },
    )
    .await
    .unwrap()
}

fn new_comment(entry_id: i64, body: &str) -> CreateComment {
    CreateComment {
        entry_id,
        name: "armin".to_string(),
        email: "armin@gmail.com".to_string(),
        body: body.to_string(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_stamps_equal_timestamps(pool: PgPool) {
    let entry = entry(&pool).await;
    let comment = CommentRepo::create(&pool, &new_comment(entry.id, "Hello There"))
        .await
        .unwrap();

    assert_eq!(comment.entry_id, entry.id);
    assert_eq!(comment.name, "armin");
    assert_eq!(comment.email, "armin@gmail.com");
    assert_eq!(comment.body, "Hello There");
    assert_eq!(comment.created_at, comment.modified_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_entry_rejected(pool: PgPool) {
    let result = CommentRepo::create(&pool, &new_comment(31_337, "lost")).await;
    assert!(result.is_err(), "Comment on a missing entry should fail");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_for_entry_oldest_first(pool: PgPool) {
    let entry = entry(&pool).await;
    for body in ["first", "second", "third"] {
        CommentRepo::create(&pool, &new_comment(entry.id, body))
            .await
            .unwrap();
    }

    let comments = CommentRepo::list_for_entry(&pool, entry.id).await.unwrap();
    let bodies: Vec<_> = comments.iter().map(|c| c.body.as_str()).collect();
    assert_eq!(bodies, vec!["first", "second", "third"]);

    assert_eq!(CommentRepo::count_for_entry(&pool, entry.id).await.unwrap(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_comments_are_scoped_to_their_entry(pool: PgPool) {
    let first = entry(&pool).await;
    let second = EntryRepo::create(
        &pool,
        &CreateEntry {
            title: "title2".to_string(),
            body: "body2".to_string(),
            author_id: first.author_id,
        },
    )
    .await
    .unwrap();

    CommentRepo::create(&pool, &new_comment(first.id, "on first"))
        .await
        .unwrap();

    assert!(CommentRepo::list_for_entry(&pool, second.id)
        .await
        .unwrap()
        .is_empty());
    assert_eq!(CommentRepo::count_for_entry(&pool, second.id).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_counts_for_entries_in_one_query(pool: PgPool) {
    let first = entry(&pool).await;
    let second = EntryRepo::create(
        &pool,
        &CreateEntry {
            title: "title2".to_string(),
            body: "body2".to_string(),
            author_id: first.author_id,
        },
    )
    .await
    .unwrap();

    for body in ["one", "two"] {
        CommentRepo::create(&pool, &new_comment(first.id, body))
            .await
            .unwrap();
    }

    let counts = CommentRepo::counts_for_entries(&pool, &[first.id, second.id])
        .await
        .unwrap();
    assert_eq!(counts.get(&first.id), Some(&2));
    assert_eq!(counts.get(&second.id), None);

    assert!(CommentRepo::counts_for_entries(&pool, &[])
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_health_check(pool: PgPool) {
    blog_db::health_check(&pool).await.unwrap();
}
