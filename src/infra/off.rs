//! Client for the Open Food Facts database: free-text nutrition search and
//! product-by-barcode lookup.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::{Deserialize, Deserializer};

use crate::domain::{NutritionError, NutritionGateway, NutritionSignal, ProductLookup};

const DEFAULT_BASE_URL: &str = "https://world.openfoodfacts.org/";
const USER_AGENT: &str = "food-bank-finder/1.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct OpenFoodFactsClient {
    http: Client,
    base_url: Url,
}

impl OpenFoodFactsClient {
    pub fn new() -> Result<Self, NutritionError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base: &str) -> Result<Self, NutritionError> {
        let base_url = Url::parse(base)?;
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, base_url })
    }
}

#[derive(Debug, Deserialize)]
struct SearchDto {
    #[serde(default)]
    products: Vec<ProductDto>,
}

#[derive(Debug, Default, Deserialize)]
struct ProductDto {
    #[serde(default)]
    nutriments: Option<NutrimentsDto>,
    #[serde(default, deserialize_with = "int_from_json")]
    nova_group: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
struct NutrimentsDto {
    #[serde(
        rename = "nutrition-score-fr_100g",
        default,
        deserialize_with = "int_from_json"
    )]
    nutrition_score_fr: Option<i64>,
}

impl From<ProductDto> for NutritionSignal {
    fn from(dto: ProductDto) -> Self {
        Self {
            nutri_score: dto.nutriments.and_then(|n| n.nutrition_score_fr),
            nova_group: dto.nova_group,
        }
    }
}

impl NutritionGateway for OpenFoodFactsClient {
    async fn search_signals(&self, query: &str) -> Result<Vec<NutritionSignal>, NutritionError> {
        let mut url = self.base_url.join("cgi/search.pl")?;
        url.query_pairs_mut()
            .append_pair("search_terms", query)
            .append_pair("search_simple", "1")
            .append_pair("action", "process")
            .append_pair("json", "1");

        let response = self.http.get(url).send().await?.error_for_status()?;
        let envelope: SearchDto = response.json().await?;
        Ok(envelope
            .products
            .into_iter()
            .map(NutritionSignal::from)
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct ProductByCodeDto {
    #[serde(default, deserialize_with = "int_from_json")]
    status: Option<i64>,
    #[serde(default)]
    product: Option<ProductNameDto>,
}

#[derive(Debug, Deserialize)]
struct ProductNameDto {
    #[serde(default)]
    product_name: Option<String>,
}

impl ProductLookup for OpenFoodFactsClient {
    async fn product_name(&self, code: &str) -> Result<Option<String>, NutritionError> {
        let url = self.base_url.join(&format!("api/v0/product/{code}.json"))?;

        let response = self.http.get(url).send().await?.error_for_status()?;
        let envelope: ProductByCodeDto = response.json().await?;

        if envelope.status != Some(1) {
            return Ok(None);
        }
        Ok(envelope
            .product
            .and_then(|p| p.product_name)
            .filter(|name| !name.is_empty()))
    }
}

/// Open Food Facts emits numeric fields as integers, floats, or strings
/// depending on the product. Accept all three; anything unparsable reads as
/// absent.
fn int_from_json<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct IntOrString;

    impl<'de> serde::de::Visitor<'de> for IntOrString {
        type Value = Option<i64>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("an integer, float, string, or null")
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(i64::try_from(value).ok())
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value as i64))
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            let trimmed = value.trim();
            Ok(trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().map(|f| f as i64)))
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(IntOrString)
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn search_extracts_one_signal_per_product_in_order() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "count": 3,
            "products": [
                { "product_name": "Granola", "nutriments": { "nutrition-score-fr_100g": 3 } },
                { "product_name": "Cola", "nova_group": 4 },
                { "product_name": "Mystery" }
            ]
        });
        Mock::given(method("GET"))
            .and(path("/cgi/search.pl"))
            .and(query_param("search_terms", "granola"))
            .and(query_param("search_simple", "1"))
            .and(query_param("action", "process"))
            .and(query_param("json", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let client = OpenFoodFactsClient::with_base_url(&server.uri()).expect("client builds");
        let signals = client.search_signals("granola").await.expect("request succeeds");

        assert_eq!(signals.len(), 3);
        assert_eq!(signals[0].nutri_score, Some(3));
        assert_eq!(signals[0].nova_group, None);
        assert_eq!(signals[1].nova_group, Some(4));
        assert_eq!(signals[2], NutritionSignal::default());
    }

    #[tokio::test]
    async fn search_accepts_string_typed_numbers() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "products": [
                { "nutriments": { "nutrition-score-fr_100g": "12" }, "nova_group": "4" }
            ]
        });
        Mock::given(method("GET"))
            .and(path("/cgi/search.pl"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let client = OpenFoodFactsClient::with_base_url(&server.uri()).expect("client builds");
        let signals = client.search_signals("cola").await.expect("request succeeds");

        assert_eq!(signals[0].nutri_score, Some(12));
        assert_eq!(signals[0].nova_group, Some(4));
    }

    #[tokio::test]
    async fn search_with_no_products_yields_no_signals() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cgi/search.pl"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "products": [] })),
            )
            .mount(&server)
            .await;

        let client = OpenFoodFactsClient::with_base_url(&server.uri()).expect("client builds");
        let signals = client.search_signals("nothing").await.expect("request succeeds");

        assert!(signals.is_empty());
    }

    #[tokio::test]
    async fn found_barcode_returns_the_product_name() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "status": 1,
            "code": "0068700115004",
            "product": { "product_name": "Oat Milk" }
        });
        Mock::given(method("GET"))
            .and(path("/api/v0/product/0068700115004.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let client = OpenFoodFactsClient::with_base_url(&server.uri()).expect("client builds");
        let name = client
            .product_name("0068700115004")
            .await
            .expect("request succeeds");

        assert_eq!(name.as_deref(), Some("Oat Milk"));
    }

    #[tokio::test]
    async fn missing_barcode_returns_none() {
        let server = MockServer::start().await;
        let body = serde_json::json!({ "status": 0, "status_verbose": "product not found" });
        Mock::given(method("GET"))
            .and(path("/api/v0/product/0000000000000.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let client = OpenFoodFactsClient::with_base_url(&server.uri()).expect("client builds");
        let name = client
            .product_name("0000000000000")
            .await
            .expect("request succeeds");

        assert_eq!(name, None);
    }
}
