//! Integration tests for the crawler
//!
//! These tests use wiremock to serve listing pages and run the full
//! fetch, extract, paginate and write cycle end-to-end.

use catalog_crawl::config::{Config, CrawlerConfig, OutputConfig, UserAgentConfig};
use catalog_crawl::crawler::crawl;
use catalog_crawl::output::write_catalog;
use serde_json::Value;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointing at the mock server
fn create_test_config(base_url: &str, output_path: &str) -> Config {
    Config {
        crawler: CrawlerConfig {
            entry_url: format!("{}/developer-challenge/smartphones", base_url),
            base_path: format!("{}/developer-challenge/", base_url),
            timeout_secs: 5,
        },
        user_agent: UserAgentConfig {
            crawler_name: "TestBot".to_string(),
            crawler_version: "1.0.0".to_string(),
        },
        output: OutputConfig {
            path: output_path.to_string(),
            pretty: true,
        },
    }
}

fn product_block(name: &str, capacity: &str, colours: &[&str], info_lines: &[&str]) -> String {
    let swatches: String = colours
        .iter()
        .map(|c| {
            format!(
                r#"<div class="px-2"><span class="border border-black rounded-full block" data-colour="{}"></span></div>"#,
                c
            )
        })
        .collect();
    let lines: String = info_lines
        .iter()
        .map(|l| format!(r#"<div class="my-4 text-sm block text-center">{}</div>"#, l))
        .collect();

    format!(
        r#"<div class="product px-4 w-full md:w-1/2 lg:w-1/4">
            <div class="bg-white p-4 rounded-md">
                <img src="../images/{name}.png" alt="{name}" class="mx-auto">
                <h3 class="my-4 text-center"><span class="product-name">{name}</span>
                    <span class="product-capacity">{capacity}</span></h3>
                <div class="my-4">
                    <div class="flex flex-wrap justify-center -mx-2">{swatches}</div>
                </div>
                <div class="my-8 block text-center text-lg">£{price}</div>
                {lines}
            </div>
        </div>"#,
        price = "399.99"
    )
}

fn listing_page(products: &[String], active_page: u32) -> String {
    let links: String = (1..=2)
        .map(|n| {
            let class = if n == active_page {
                "active bg-blue-600 text-white px-6 py-2"
            } else {
                "px-6 py-2"
            };
            format!(
                r#"<a href="../smartphones/?page={n}" class="{class}">{n}</a>"#
            )
        })
        .collect();

    format!(
        r#"<html><head><title>Smartphones</title></head><body>
            <div class="container mx-auto">
                <h1 class="text-4xl">Smartphones</h1>
                <div id="products">
                    <div class="flex flex-wrap -mx-4">{}</div>
                </div>
                <div id="pages">
                    <div class="flex flex-wrap justify-center -mx-6">{}</div>
                </div>
            </div>
        </body></html>"#,
        products.concat(),
        links
    )
}

async fn mount_page(server: &MockServer, route: &str, page: Option<&str>, body: String) {
    let mut mock = Mock::given(method("GET")).and(path(route));
    if let Some(page) = page {
        mock = mock.and(query_param("page", page));
    }
    mock.respond_with(
        ResponseTemplate::new(200)
            .set_body_string(body)
            .insert_header("content-type", "text/html"),
    )
    .mount(server)
    .await;
}

#[tokio::test]
async fn test_full_crawl_two_pages() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/developer-challenge/smartphones",
        None,
        listing_page(
            &[product_block(
                "iPhone 11",
                "64GB",
                &["Red", "Blue"],
                &["Availability: In Stock", "Delivery by 3rd April 2024"],
            )],
            1,
        ),
    )
    .await;

    mount_page(
        &mock_server,
        "/developer-challenge/smartphones/",
        Some("2"),
        listing_page(
            &[
                product_block("iPhone 11", "64GB", &["Red"], &["Availability: Out of Stock"]),
                product_block("Nokia 3310", "16 MB", &["Green"], &["Availability: Out of Stock"]),
                product_block(" ", "", &["Black"], &["Availability: In Stock"]),
            ],
            2,
        ),
    )
    .await;

    // The active link on page 1 must never be requested
    Mock::given(method("GET"))
        .and(path("/developer-challenge/smartphones/"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let output_path = dir.path().join("output.json");
    let config = create_test_config(&base_url, &output_path.to_string_lossy());

    let outcome = crawl(&config).await.expect("Crawl failed");
    assert_eq!(outcome.pages_fetched, 2);

    write_catalog(&outcome.products, &config.output).expect("Failed to write catalog");

    let written: Value = serde_json::from_str(
        &std::fs::read_to_string(&output_path).expect("Failed to read output"),
    )
    .expect("Output is not JSON");
    let items = written.as_array().expect("Output is not an array");

    let variants: Vec<(&str, &str)> = items
        .iter()
        .map(|p| (p["title"].as_str().unwrap(), p["colour"].as_str().unwrap()))
        .collect();
    assert_eq!(
        variants,
        vec![
            ("iPhone 11 64GB", "Red"),
            ("iPhone 11 64GB", "Blue"),
            ("Nokia 3310 16 MB", "Green"),
        ]
    );

    let red = &items[0];
    assert_eq!(red["price"], "399.99");
    assert_eq!(
        red["imageUrl"],
        format!("{}/developer-challenge/images/iPhone 11.png", base_url)
    );
    assert_eq!(red["capacityMB"], "65536MB");
    assert_eq!(red["availabilityText"], "In Stock");
    assert_eq!(red["isAvailable"], true);
    assert_eq!(red["shippingText"], "Delivery by 3rd April 2024");
    assert_eq!(red["shippingDate"], "2024-04-03");

    let nokia = &items[2];
    assert_eq!(nokia["capacityMB"], "16MB");
    assert_eq!(nokia["isAvailable"], false);
    assert_eq!(nokia["shippingText"], "");
    assert_eq!(nokia["shippingDate"], "");
}

#[tokio::test]
async fn test_failed_page_aborts_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/developer-challenge/smartphones",
        None,
        listing_page(
            &[product_block("iPhone 11", "64GB", &["Red"], &["Availability: In Stock"])],
            1,
        ),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/developer-challenge/smartphones/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let output_path = dir.path().join("output.json");
    let config = create_test_config(&base_url, &output_path.to_string_lossy());

    let err = crawl(&config).await.expect_err("Crawl should fail");

    assert!(err.is_fetch_error());
    assert_eq!(
        err.url(),
        Some(format!("{}/developer-challenge/smartphones/?page=2", base_url).as_str())
    );
    assert!(!output_path.exists());
}

#[tokio::test]
async fn test_unreachable_entry_page() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let config = create_test_config(&base_url, "unused.json");

    // No mocks mounted: wiremock answers 404
    let err = crawl(&config).await.expect_err("Crawl should fail");

    assert!(err.is_fetch_error());
    assert!(err.to_string().contains("/developer-challenge/smartphones"));
}
