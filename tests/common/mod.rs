//! Shared helpers for the HTTP-level tests

#![allow(dead_code)]

use bo_nalog::{BoNalogClient, ClientConfig};
use serde_json::{Value, json};

pub const SEARCH_PATH: &str = "/advanced-search/organizations";

/// Route `log` output through the test harness
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Client pointed at a mock server
pub fn client_for(server: &mockito::ServerGuard) -> BoNalogClient {
    BoNalogClient::with_base_url(server.url(), ClientConfig::new().timeout_secs(5))
        .expect("client should build")
}

/// Organization record as the registry serializes it
pub fn organization_json(id: i64) -> Value {
    json!({
        "id": id,
        "inn": format!("77{:08}", id),
        "shortName": format!("ПАО \"СБЕРБАНК {}\"", id),
        "ogrn": format!("10277{:08}", id),
        "index": "117312",
        "region": "Москва",
        "district": null,
        "city": null,
        "settlement": null,
        "street": "ул. Вавилова",
        "house": "д. 19",
        "building": null,
        "office": null,
        "okved2": "64.19",
        "okopf": 12247,
        "okato": "45293554000",
        "okpo": "00032537",
        "okfs": "41",
        "statusCode": "ACTIVE",
        "statusDate": "2002-08-16",
        "bfo": {
            "period": "2023",
            "actualBfoDate": "2024-03-28",
            "gainSum": null,
            "knd": "0710099",
            "hasAz": true,
            "hasKs": true,
            "actualCorrectionNumber": 0,
            "actualCorrectionDate": "2024-03-28",
            "isCb": false,
            "bfoPeriodTypes": [12, 3]
        }
    })
}

/// Consistent result page in the registry's wire format
pub fn page_json(number: u64, size: u64, total_elements: u64, content: Vec<Value>) -> Value {
    let total_pages = if size == 0 {
        0
    } else {
        total_elements.div_ceil(size)
    };
    let sort = json!({ "sorted": false, "unsorted": true, "empty": true });
    let count = content.len();

    json!({
        "content": content,
        "pageable": {
            "pageNumber": number,
            "pageSize": size,
            "sort": sort,
            "offset": number * size,
            "paged": true,
            "unpaged": false
        },
        "totalPages": total_pages,
        "totalElements": total_elements,
        "last": number + 1 >= total_pages,
        "first": number == 0,
        "numberOfElements": count,
        "size": size,
        "number": number,
        "sort": sort,
        "empty": count == 0
    })
}
