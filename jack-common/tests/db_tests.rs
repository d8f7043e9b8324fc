//! Database initialization and catalog query tests

use chrono::{Duration, Utc};
use jack_common::db::{channels, comments, videos};
use jack_common::db::{init_database, init_in_memory_database, Channel, CommentTarget, Video};

const CHANNEL_ID: &str = "TokaiOnAir";
const CHANNEL_NM: &str = "東海オンエア";
const VIDEO_ID: &str = "mP6WW_BHsaA";
const COMMENT: &str = "カントゥーヤ！";

#[tokio::test]
async fn test_database_creation_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("nested").join("jack.db");

    let pool = init_database(&db_path).await;
    assert!(pool.is_ok(), "Database initialization failed: {:?}", pool.err());
    assert!(db_path.exists(), "Database file was not created");
}

#[tokio::test]
async fn test_database_opens_existing() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("jack.db");

    let pool = init_database(&db_path).await.unwrap();
    channels::insert_channel(&pool, &Channel::new(CHANNEL_ID, CHANNEL_NM))
        .await
        .unwrap();
    pool.close().await;

    // Second open must keep existing rows
    let pool = init_database(&db_path).await.unwrap();
    let listed = channels::list_channels(&pool).await.unwrap();
    assert_eq!(listed, vec![Channel::new(CHANNEL_ID, CHANNEL_NM)]);
}

#[tokio::test]
async fn test_channels_listed_in_insertion_order() {
    let pool = init_in_memory_database().await.unwrap();

    for id in ["zeta", "alpha", "mid"] {
        channels::insert_channel(&pool, &Channel::new(id, id)).await.unwrap();
    }

    let ids: Vec<String> = channels::list_channels(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.channel_id)
        .collect();
    assert_eq!(ids, vec!["zeta", "alpha", "mid"]);
}

#[tokio::test]
async fn test_duplicate_channel_is_not_inserted_twice() {
    let pool = init_in_memory_database().await.unwrap();

    let first = channels::insert_channel(&pool, &Channel::new(CHANNEL_ID, CHANNEL_NM))
        .await
        .unwrap();
    let second = channels::insert_channel(&pool, &Channel::new(CHANNEL_ID, "renamed"))
        .await
        .unwrap();

    assert!(first);
    assert!(!second);

    let listed = channels::list_channels(&pool).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].channel_nm, CHANNEL_NM);
}

#[tokio::test]
async fn test_require_channel_not_found() {
    let pool = init_in_memory_database().await.unwrap();

    let err = channels::require_channel(&pool, "TokaiOnAirJanai")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_videos_scoped_to_owner() {
    let pool = init_in_memory_database().await.unwrap();
    channels::insert_channel(&pool, &Channel::new(CHANNEL_ID, CHANNEL_NM)).await.unwrap();
    channels::insert_channel(&pool, &Channel::new("other", "Other")).await.unwrap();

    videos::insert_video(&pool, &Video::new(VIDEO_ID, CHANNEL_ID)).await.unwrap();
    videos::insert_video(&pool, &Video::new("aaaaaaaaaaa", "other")).await.unwrap();

    let owned = videos::list_videos_for_channel(&pool, CHANNEL_ID).await.unwrap();
    assert_eq!(owned, vec![Video::new(VIDEO_ID, CHANNEL_ID)]);
}

#[tokio::test]
async fn test_video_requires_existing_channel() {
    let pool = init_in_memory_database().await.unwrap();

    let result = videos::insert_video(&pool, &Video::new(VIDEO_ID, "missing")).await;
    assert!(result.is_err(), "Foreign key should reject orphan video");
}

#[tokio::test]
async fn test_channel_page_comments_include_video_comments() {
    let pool = init_in_memory_database().await.unwrap();
    channels::insert_channel(&pool, &Channel::new(CHANNEL_ID, CHANNEL_NM)).await.unwrap();
    channels::insert_channel(&pool, &Channel::new("other", "Other")).await.unwrap();
    videos::insert_video(&pool, &Video::new(VIDEO_ID, CHANNEL_ID)).await.unwrap();
    videos::insert_video(&pool, &Video::new("bbbbbbbbbbb", "other")).await.unwrap();

    let now = Utc::now();
    let on_channel = CommentTarget::Channel(CHANNEL_ID.to_string());
    let on_video = CommentTarget::Video(VIDEO_ID.to_string());

    comments::insert_comment(&pool, &on_video, "second", now).await.unwrap();
    comments::insert_comment(&pool, &on_channel, COMMENT, now - Duration::seconds(5))
        .await
        .unwrap();
    comments::insert_comment(&pool, &CommentTarget::Channel("other".into()), "x", now)
        .await
        .unwrap();
    comments::insert_comment(&pool, &CommentTarget::Video("bbbbbbbbbbb".into()), "y", now)
        .await
        .unwrap();

    let shown = comments::list_comments_for_channel(&pool, CHANNEL_ID).await.unwrap();
    let texts: Vec<&str> = shown.iter().map(|c| c.comment.as_str()).collect();
    assert_eq!(texts, vec![COMMENT, "second"]);
    assert_eq!(shown[0].target, on_channel);
    assert_eq!(shown[1].target, on_video);
}

#[tokio::test]
async fn test_insert_comment_round_trips_target() {
    let pool = init_in_memory_database().await.unwrap();
    channels::insert_channel(&pool, &Channel::new(CHANNEL_ID, CHANNEL_NM)).await.unwrap();

    let target = CommentTarget::Channel(CHANNEL_ID.to_string());
    let stored = comments::insert_comment(&pool, &target, COMMENT, Utc::now())
        .await
        .unwrap();
    assert_eq!(stored.to_string(), "channel:TokaiOnAir");

    let loaded = comments::list_comments_for_target(&pool, &target).await.unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, stored.id);
    assert_eq!(loaded[0].comment, COMMENT);
    assert_eq!(loaded[0].reg_datetime, stored.reg_datetime);
}
