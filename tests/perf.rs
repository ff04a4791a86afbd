//! Load tests against a running server (`cargo run`, then
//! `cargo test --test perf -- --ignored --nocapture`).

use serde_json::{json, Value};
use std::time::Instant;

const GRAPHQL_URL: &str = "http://127.0.0.1:4000/graphql";
const NUM_POSTS: usize = 200;
const LIKES_PER_POST: usize = 5;
const LOADED_USER_ID: &str = "0";

async fn execute(client: &reqwest::Client, query: &str, variables: Value) -> Option<Value> {
    let resp = client
        .post(GRAPHQL_URL)
        .json(&json!({ "query": query, "variables": variables }))
        .send()
        .await
        .ok()?;
    if !resp.status().is_success() {
        return None;
    }
    let body = resp.json::<Value>().await.ok()?;
    if body.get("errors").is_some() {
        return None;
    }
    Some(body["data"].clone())
}

#[ignore]
#[tokio::test(flavor = "multi_thread")]
async fn perf_test_posts_and_likes() {
    let client = reqwest::Client::new();
    let start = Instant::now();

    println!("\n=== Performance Test ===");
    println!("Creating {} posts with {} likes each...", NUM_POSTS, LIKES_PER_POST);

    let mut post_ids = Vec::new();
    let post_creation_start = Instant::now();
    for i in 0..NUM_POSTS {
        let data = execute(
            &client,
            "mutation($t: String!, $c: String!, $a: ID!) { addPost(title: $t, content: $c, authorId: $a) { id } }",
            json!({
                "t": format!("perf {}", i),
                "c": format!("Post {} - run {}", i, uuid::Uuid::new_v4()),
                "a": LOADED_USER_ID,
            }),
        )
        .await;
        if let Some(id) = data.as_ref().and_then(|d| d["addPost"]["id"].as_str()) {
            post_ids.push(id.to_string());
        }

        if (i + 1) % 50 == 0 {
            println!("  Created {}/{} posts", i + 1, NUM_POSTS);
        }
    }
    let post_creation_time = post_creation_start.elapsed();

    let like_start = Instant::now();
    let mut likes_ok = 0;
    let mut likes_failed = 0;
    for id in &post_ids {
        for _ in 0..LIKES_PER_POST {
            let data = execute(
                &client,
                "mutation($p: ID!) { likePost(postId: $p, userId: \"1\") { likes } }",
                json!({ "p": id }),
            )
            .await;
            if data.is_some() {
                likes_ok += 1;
            } else {
                likes_failed += 1;
            }
        }
    }
    let like_time = like_start.elapsed();

    let total_time = start.elapsed();
    let total_requests = post_ids.len() + likes_ok + likes_failed;

    println!("\n=== Results ===");
    println!("Total time: {:.2}s", total_time.as_secs_f64());
    println!("Post creation: {:.2}s", post_creation_time.as_secs_f64());
    println!("Likes: {:.2}s", like_time.as_secs_f64());
    println!("Posts created: {}", post_ids.len());
    println!("Likes ok: {}", likes_ok);
    println!("Likes failed: {}", likes_failed);
    println!(
        "Throughput: {:.0} requests/sec",
        total_requests as f64 / total_time.as_secs_f64()
    );
}

#[ignore]
#[tokio::test(flavor = "multi_thread")]
async fn perf_test_load_user_with_many_posts() {
    let client = reqwest::Client::new();

    println!("\n=== Load User Performance Test ===");

    let fetch_start = Instant::now();
    let data = execute(
        &client,
        "query($id: ID!) { user(id: $id) { name posts { id likes author { name } } followers { id } } }",
        json!({ "id": LOADED_USER_ID }),
    )
    .await;
    let fetch_time = fetch_start.elapsed();

    match data {
        Some(d) => println!(
            "User fetch: {} posts in {:.2}ms",
            d["user"]["posts"].as_array().map_or(0, |p| p.len()),
            fetch_time.as_secs_f64() * 1000.0
        ),
        None => println!("User fetch failed after {:.2}ms", fetch_time.as_secs_f64() * 1000.0),
    }
}
