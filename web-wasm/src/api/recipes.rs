//! カクテル候補クライアント
//!
//! TheCocktailDB公開APIに対するクロスオリジン呼び出し。
//! 材料からのカクテル検索と、レシピ詳細の取得を行う

use web_sys::{Request, RequestInit, RequestMode};

use mixshelf_common::{parser, DrinkDetail, DrinkSummary, Error, Result};

use super::{js_message, response_text, run_fetch};

const COCKTAILDB_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1";

fn filter_url(ingredient: &str) -> String {
    format!("{}/filter.php?i={}", COCKTAILDB_URL, ingredient)
}

fn lookup_url(drink_id: &str) -> String {
    format!("{}/lookup.php?i={}", COCKTAILDB_URL, drink_id)
}

/// クロスオリジンGETを発行してステータスとボディを返す
async fn get_text(url: &str) -> Result<(u16, String)> {
    let mut opts = RequestInit::new();
    opts.method("GET");
    opts.mode(RequestMode::Cors);

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|e| Error::Network(js_message(&e)))?;

    let resp = run_fetch(&request).await?;
    let status = resp.status();
    let body = response_text(&resp).await?;
    Ok((status, body))
}

/// 指定材料で作れるカクテル候補を取得する
///
/// 該当なしは空リスト（エラーではない）
pub async fn suggest_drinks(ingredient: &str) -> Result<Vec<DrinkSummary>> {
    let (status, body) = get_text(&filter_url(ingredient)).await?;
    if !(200..300).contains(&status) {
        return Err(Error::Recipe(format!("status {}", status)));
    }
    parser::parse_drinks_response(&body)
}

/// レシピ詳細を取得する
pub async fn fetch_recipe_details(drink_id: &str) -> Result<DrinkDetail> {
    let (status, body) = get_text(&lookup_url(drink_id)).await?;
    if !(200..300).contains(&status) {
        return Err(Error::Recipe(format!("status {}", status)));
    }
    parser::parse_recipe_response(&body)
}
