//! Print-and-exit catalog views for the command line.

use std::time::Duration;

use guitarshop::logic::{MODELS_PER_PAGE, ViewParameters, derive, display_type_label};
use guitarshop::sources::{CatalogClient, CatalogGateway, SortSpec};
use guitarshop::state::TypeFilter;
use guitarshop::util::format_price;

use crate::args::i18n;

/// What: Build the GraphQL client from settings, honoring `--endpoint`.
///
/// Inputs:
/// - `endpoint_override`: Endpoint given on the command line, if any.
///
/// Output:
/// - Client, or `None` after printing the failure.
fn client(endpoint_override: Option<String>) -> Option<CatalogClient> {
    let settings = guitarshop::theme::settings();
    let endpoint = endpoint_override.unwrap_or(settings.endpoint);
    match CatalogClient::new(
        endpoint,
        Duration::from_secs(settings.request_timeout_secs),
    ) {
        Ok(c) => Some(c),
        Err(e) => {
            eprintln!("{}", i18n::t_fmt1("app.cli.fetch_failed", &e));
            tracing::error!(error = %e, "failed to build catalog client");
            None
        }
    }
}

/// What: Print every brand as `id  name`.
///
/// Inputs:
/// - `endpoint_override`: Endpoint from `--endpoint`.
///
/// Output:
/// - Process exit code (0 on success, 1 on fetch failure).
pub async fn handle_brands(endpoint_override: Option<String>) -> i32 {
    tracing::info!("Brands listing requested from CLI");
    let Some(client) = client(endpoint_override) else {
        return 1;
    };
    match client.list_brands().await {
        Ok(brands) => {
            println!("{}", i18n::t("app.cli.brands_heading"));
            if brands.is_empty() {
                println!("  {}", i18n::t("app.brands.empty"));
            }
            for b in &brands {
                println!("  {:<12} {}", b.id, b.name);
            }
            0
        }
        Err(e) => {
            eprintln!("{}", i18n::t_fmt1("app.cli.fetch_failed", &e));
            tracing::error!(error = %e, "brands fetch failed");
            1
        }
    }
}

/// What: Print one page of a brand's models through the derivation pipeline.
///
/// Inputs:
/// - `endpoint_override`: Endpoint from `--endpoint`.
/// - `brand_id`: Brand to list.
/// - `search`: Search text; blank means the full name-sorted listing.
/// - `type_filter`: Filter value such as `all` or `bass`.
/// - `page`: One-based page (clamped by the pipeline).
///
/// Output:
/// - Process exit code (0 on success, 1 on fetch failure, 2 on a bad `--type`).
pub async fn handle_models(
    endpoint_override: Option<String>,
    brand_id: &str,
    search: &str,
    type_filter: &str,
    page: usize,
) -> i32 {
    tracing::info!(brand_id, search, type_filter, page, "Models listing requested from CLI");
    let Some(filter) = TypeFilter::parse(type_filter) else {
        eprintln!("{}", i18n::t_fmt1("app.cli.invalid_type", type_filter));
        return 2;
    };
    let Some(client) = client(endpoint_override) else {
        return 1;
    };
    let fetched = if search.trim().is_empty() {
        client.list_models(brand_id, &SortSpec::name_asc()).await
    } else {
        client.search_models(brand_id, search.trim()).await
    };
    let raw = match fetched {
        Ok(items) => items,
        Err(e) => {
            eprintln!("{}", i18n::t_fmt1("app.cli.fetch_failed", &e));
            tracing::error!(error = %e, brand_id, "models fetch failed");
            return 1;
        }
    };

    let params = ViewParameters {
        search_term: search.to_string(),
        type_filter: filter,
        page_index: page.saturating_sub(1),
        page_size: MODELS_PER_PAGE,
    };
    let view = derive(&raw, &params);

    println!("{}", i18n::t_fmt1("app.cli.models_heading", brand_id));
    if view.items.is_empty() {
        let msg = if params.is_search() {
            i18n::t_fmt1("app.models.empty_search", search.trim())
        } else if let TypeFilter::Only(_) = filter {
            i18n::t_fmt1("app.models.empty_type", i18n::t(filter.label_key()))
        } else {
            i18n::t("app.models.empty_listing")
        };
        println!("  {msg}");
        return 0;
    }
    println!(
        "{}",
        i18n::t_fmt(
            "app.models.showing",
            &[&view.first_shown(), &view.last_shown(), &view.total_items],
        )
    );
    for m in &view.items {
        let price = format_price(m.price).unwrap_or_default();
        println!(
            "  {:<12} {:<32} {:<18} {}",
            m.id,
            m.name,
            display_type_label(i18n::cli_locale(), m),
            price
        );
    }
    println!(
        "{}",
        i18n::t_fmt(
            "app.pagination.page",
            &[&(view.page_index + 1), &view.total_pages],
        )
    );
    0
}

/// What: Print a model's summary, specifications and musicians.
///
/// Inputs:
/// - `endpoint_override`: Endpoint from `--endpoint`.
/// - `brand_id`: Owning brand.
/// - `model_id`: Model to show.
///
/// Output:
/// - Process exit code (0 on success, 1 on fetch failure or unknown model).
pub async fn handle_details(
    endpoint_override: Option<String>,
    brand_id: &str,
    model_id: &str,
) -> i32 {
    tracing::info!(brand_id, model_id, "Model details requested from CLI");
    let Some(client) = client(endpoint_override) else {
        return 1;
    };
    let rec = match client.get_model_details(brand_id, model_id).await {
        Ok(Some(rec)) => rec,
        Ok(None) => {
            eprintln!("{}", i18n::t("app.cli.not_found"));
            tracing::warn!(brand_id, model_id, "model not found");
            return 1;
        }
        Err(e) => {
            eprintln!("{}", i18n::t_fmt1("app.cli.fetch_failed", &e));
            tracing::error!(error = %e, brand_id, model_id, "details fetch failed");
            return 1;
        }
    };

    println!("{}", i18n::t_fmt1("app.cli.details_heading", &rec.item.name));
    println!(
        "  {}: {}",
        i18n::t("app.details.type"),
        display_type_label(i18n::cli_locale(), &rec.item)
    );
    if let Some(price) = format_price(rec.item.price) {
        println!("  {}: {price}", i18n::t("app.details.price"));
    }
    match &rec.description {
        Some(d) => println!("  {d}"),
        None => println!("  {}", i18n::t("app.details.no_description")),
    }

    println!();
    println!("{}", i18n::t("app.details.tabs.specifications"));
    let rows = rec.specs.as_ref().map(|s| s.rows()).unwrap_or_default();
    if rows.is_empty() {
        println!("  {}", i18n::t("app.details.specs.empty"));
    }
    for (key, value) in rows {
        println!("  {:<18} {value}", i18n::t(key));
    }

    println!();
    println!("{}", i18n::t("app.details.tabs.musicians"));
    if rec.musicians.is_empty() {
        println!("  {}", i18n::t("app.details.musicians.empty"));
    }
    for m in &rec.musicians {
        if m.bands.is_empty() {
            println!("  {}", m.name);
        } else {
            println!(
                "  {} ({}: {})",
                m.name,
                i18n::t("app.details.musicians.bands"),
                m.bands.join(", ")
            );
        }
    }
    0
}
