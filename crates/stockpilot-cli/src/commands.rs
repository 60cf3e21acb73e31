//! Command implementations and plain-text rendering.

use anyhow::{Context as _, Result};
use clap::{Subcommand, ValueEnum};
use tracing::warn;

use stockpilot_core::api::{ApiClient, ApiError};
use stockpilot_core::auth::CredentialStore;
use stockpilot_core::config::Settings;
use stockpilot_core::models::{LoginRequest, OrderRequest, OrderSide};
use stockpilot_core::routes::Navigator;
use stockpilot_core::utils::{format_amount, format_change, format_percent, format_phone, truncate_string};

/// Width of the title column in list output
const TITLE_WIDTH: usize = 40;

pub struct Context {
    pub client: ApiClient,
    pub navigator: Navigator,
    pub settings: Settings,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in (uses the remembered password if any)
    Login {
        /// User id, defaults to the last one used
        id: Option<String>,
        /// Save the password in the OS keychain for next time
        #[arg(long)]
        remember: bool,
    },
    /// Sign out
    Logout {
        /// Also forget the saved password
        #[arg(long)]
        forget: bool,
    },
    /// List every route and whether it needs a session
    Routes,
    /// Show where navigating to a path would land
    Route { path: String },
    /// Account and linked broker
    Profile,
    /// Asset dashboard
    Summary,
    /// Stock positions
    Holdings,
    /// Find stocks
    Search { query: String },
    /// Company overview
    Company { symbol: String },
    /// Pending and reserved orders with trading history
    Orders,
    /// Place an order
    Order {
        /// buy or sell
        side: OrderSide,
        symbol: String,
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        quantity: u64,
        price: f64,
    },
    /// Cancel a pending order
    Cancel { order_id: String },
    /// Headlines, or one article
    News { id: Option<String> },
    /// Indices, exchange rates and top news
    Market,
    /// AI bot status, or switch it
    Bot {
        #[arg(value_enum)]
        action: Option<BotAction>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotAction {
    On,
    Off,
}

pub async fn run(ctx: &mut Context, command: Command) -> Result<()> {
    match command {
        Command::Login { id, remember } => login(ctx, id, remember).await,
        Command::Logout { forget } => logout(ctx, forget).await,
        Command::Routes => {
            list_routes(ctx);
            Ok(())
        }
        Command::Route { path } => show_route(ctx, &path),
        Command::Profile => profile(ctx).await,
        Command::Summary => summary(ctx).await,
        Command::Holdings => holdings(ctx).await,
        Command::Search { query } => search(ctx, &query).await,
        Command::Company { symbol } => company(ctx, &symbol).await,
        Command::Orders => orders(ctx).await,
        Command::Order {
            side,
            symbol,
            quantity,
            price,
        } => {
            let order = OrderRequest {
                symbol,
                side,
                quantity,
                price,
            };
            place_order(ctx, order).await
        }
        Command::Cancel { order_id } => cancel(ctx, &order_id).await,
        Command::News { id } => news(ctx, id.as_deref()).await,
        Command::Market => market(ctx).await,
        Command::Bot { action } => bot(ctx, action).await,
    }
}

/// Navigate to the screen a command stands in for.
/// Returns false when the route guard sent us elsewhere.
fn enter(ctx: &Context, path: &str) -> Result<bool> {
    let navigation = ctx.navigator.navigate(path)?;
    if let Some(ref from) = navigation.redirected_from {
        eprintln!(
            "Sign-in required: {} redirected to {}. Run `stockpilot login` first.",
            from,
            navigation.path()
        );
        return Ok(false);
    }
    Ok(true)
}

// ===== Session =====

async fn login(ctx: &mut Context, id: Option<String>, remember: bool) -> Result<()> {
    let id = id
        .or_else(|| ctx.settings.last_user_id.clone())
        .context("Missing argument <id>")?;

    let remembered = if ctx.settings.auto_login {
        CredentialStore::get_password(&id).unwrap_or_else(|e| {
            warn!(error = %e, "Could not read remembered password");
            None
        })
    } else {
        None
    };
    let password = match remembered {
        Some(password) => password,
        None => rpassword::prompt_password(format!("Password for {}: ", id))
            .context("Failed to read password")?,
    };

    let request = LoginRequest {
        id: id.clone(),
        password,
    };
    ctx.client.login(&request).await.context("Login failed")?;

    if remember {
        CredentialStore::store(&id, &request.password)?;
        ctx.settings.auto_login = true;
    }
    ctx.settings.last_user_id = Some(id.clone());
    ctx.settings.save()?;

    println!("Signed in as {}", id);
    Ok(())
}

async fn logout(ctx: &mut Context, forget: bool) -> Result<()> {
    match ctx.client.logout().await {
        Ok(()) => {}
        Err(ApiError::Storage(e)) => {
            return Err(e).context("The local session could not be removed");
        }
        Err(e) => {
            eprintln!("Server logout failed ({}); the local session was removed anyway.", e);
        }
    }

    if forget {
        if let Some(ref id) = ctx.settings.last_user_id {
            CredentialStore::delete(id)?;
        }
        ctx.settings.auto_login = false;
        ctx.settings.save()?;
    }

    println!("Signed out");
    Ok(())
}

// ===== Navigation =====

fn list_routes(ctx: &Context) {
    for route in ctx.navigator.table().routes() {
        println!(
            "{:<20} {:<18} {:<8} {}",
            route.pattern,
            route.name,
            if route.requires_auth() { "session" } else { "public" },
            if route.show_bottom_nav { "tab" } else { "" }
        );
    }
}

fn show_route(ctx: &Context, path: &str) -> Result<()> {
    let navigation = ctx.navigator.navigate(path)?;
    match navigation.redirected_from {
        Some(ref from) => println!("{} -> {} ({:?}, redirected)", from, navigation.path(), navigation.target.route.view),
        None => println!("{} ({:?})", navigation.path(), navigation.target.route.view),
    }
    for (name, value) in &navigation.target.params {
        println!("  {} = {}", name, value);
    }
    Ok(())
}

// ===== Data =====

async fn profile(ctx: &Context) -> Result<()> {
    if !enter(ctx, "/profile")? {
        return Ok(());
    }
    let profile = ctx.client.get_profile().await?;
    println!("{} ({})", profile.name, profile.id);
    if let Some(ref phone) = profile.phone {
        println!("Phone:   {}", format_phone(phone));
    }
    if let Some(birth) = profile.birth {
        println!("Birth:   {}", birth.format("%Y-%m-%d"));
    }
    if let Some(ref broker) = profile.broker {
        println!("Broker:  {} {}", broker.name, broker.masked_account_number());
    }
    Ok(())
}

async fn summary(ctx: &Context) -> Result<()> {
    if !enter(ctx, "/assets")? {
        return Ok(());
    }
    let summary = ctx.client.get_asset_summary().await?;
    println!(
        "Total {}  {} ({})",
        format_amount(summary.total_asset),
        format_change(summary.total_change),
        format_percent(summary.change_percent)
    );
    for (kind, bucket) in summary.breakdown.buckets() {
        println!(
            "  {:<8} {:>16} {:>12} {:>8}",
            kind,
            format_amount(bucket.amount),
            format_change(bucket.change),
            format_percent(bucket.change_percent)
        );
    }
    if let Some(updated) = summary.updated_at {
        println!("Updated {}", updated.format("%Y-%m-%d %H:%M"));
    }
    Ok(())
}

async fn holdings(ctx: &Context) -> Result<()> {
    if !enter(ctx, "/assets/detail")? {
        return Ok(());
    }
    let holdings = ctx.client.get_stock_holdings().await?;
    if holdings.is_empty() {
        println!("No stock positions");
    }
    for h in holdings {
        println!(
            "{:<6} {:<20} {:>6} x {:>12} = {:>14} {:>8}",
            h.symbol,
            truncate_string(&h.name, 20),
            h.quantity,
            format_amount(h.current_price.round() as i64),
            format_amount(h.market_value().round() as i64),
            format_percent(h.profit_percent)
        );
    }
    Ok(())
}

async fn search(ctx: &Context, query: &str) -> Result<()> {
    if !enter(ctx, "/search")? {
        return Ok(());
    }
    for result in ctx.client.search_stocks(query).await? {
        println!(
            "{} {:<6} {}",
            if result.is_favorite { "*" } else { " " },
            result.symbol,
            result.name
        );
    }
    Ok(())
}

async fn company(ctx: &Context, symbol: &str) -> Result<()> {
    if !enter(ctx, &format!("/company/{}", symbol))? {
        return Ok(());
    }
    let info = ctx.client.get_company(symbol).await?;
    println!("{} {}", info.symbol, info.name);
    if let Some(ref en) = info.name_en {
        println!("  {}", en);
    }
    if let Some(ref sector) = info.sector {
        println!("Sector:     {}", sector);
    }
    if let Some(employees) = info.employees {
        println!("Employees:  {}", format_amount(employees as i64));
    }
    if let Some(cap) = info.market_cap {
        println!(
            "Market cap: {} {}",
            format_amount(cap.round() as i64),
            info.currency.as_deref().unwrap_or("")
        );
    }
    if let Some(scores) = info.scores {
        println!(
            "Scores:     PER {} / PBR {} / ROE {} / EPS {} (avg {:.1})",
            scores.per,
            scores.pbr,
            scores.roe,
            scores.eps,
            scores.average()
        );
    }
    if let Some(ref description) = info.description {
        println!("\n{}", description);
    }
    Ok(())
}

async fn orders(ctx: &Context) -> Result<()> {
    if !enter(ctx, "/transactions")? {
        return Ok(());
    }
    let (orders, history) = futures::try_join!(
        ctx.client.get_orders(),
        ctx.client.get_trading_history(&()),
    )?;

    for (label, list) in [("Pending", &orders.pending), ("Reserved", &orders.reserved)] {
        println!("{} ({})", label, list.len());
        for order in list {
            println!(
                "  {:<4} {:<6} {:<16} {}{}  {}",
                order.side,
                order.symbol,
                truncate_string(order.name.as_deref().unwrap_or(""), 16),
                order.currency.as_deref().unwrap_or(""),
                format_amount(order.price.round() as i64),
                order.order_id.as_deref().unwrap_or("")
            );
        }
    }

    println!("History ({})", history.len());
    for entry in history {
        println!(
            "  {:<9} {:<width$} {}{}",
            format!("{:?}", entry.kind).to_lowercase(),
            truncate_string(entry.title(), TITLE_WIDTH),
            entry.currency.as_deref().unwrap_or(""),
            format_amount(entry.amount.round() as i64),
            width = TITLE_WIDTH
        );
    }
    Ok(())
}

async fn place_order(ctx: &Context, order: OrderRequest) -> Result<()> {
    if !enter(ctx, &format!("/trading/{}", order.symbol))? {
        return Ok(());
    }
    let receipt = ctx.client.place_order(&order).await?;
    println!(
        "Order placed: {} {} x {} @ {}",
        order.side, order.symbol, order.quantity, order.price
    );
    if !receipt.is_null() {
        println!("{}", serde_json::to_string_pretty(&receipt)?);
    }
    Ok(())
}

async fn cancel(ctx: &Context, order_id: &str) -> Result<()> {
    if !enter(ctx, "/transactions")? {
        return Ok(());
    }
    ctx.client.cancel_order(order_id).await?;
    println!("Order {} cancelled", order_id);
    Ok(())
}

async fn news(ctx: &Context, id: Option<&str>) -> Result<()> {
    match id {
        Some(id) => {
            if !enter(ctx, &format!("/news/{}", id))? {
                return Ok(());
            }
            let article = ctx.client.get_news(id).await?;
            println!("{}", article.title);
            println!(
                "{} {}",
                article.source.as_deref().unwrap_or(""),
                article.date.as_deref().unwrap_or("")
            );
            if !article.tags.is_empty() {
                println!("{}", article.tags.join(" "));
            }
            for paragraph in article.paragraphs() {
                println!("\n{}", paragraph);
            }
            if !article.related_news.is_empty() {
                println!("\nRelated:");
                for related in &article.related_news {
                    println!("  [{}] {}", related.id, related.title);
                }
            }
        }
        None => {
            if !enter(ctx, "/news")? {
                return Ok(());
            }
            for headline in ctx.client.list_news(&()).await? {
                println!(
                    "[{}] {:<width$} {}",
                    headline.id,
                    truncate_string(&headline.title, TITLE_WIDTH),
                    headline.date.as_deref().unwrap_or(""),
                    width = TITLE_WIDTH
                );
            }
        }
    }
    Ok(())
}

async fn market(ctx: &Context) -> Result<()> {
    if !enter(ctx, "/home")? {
        return Ok(());
    }
    let (indices, rates, top_news) = futures::try_join!(
        ctx.client.get_market_indices(),
        ctx.client.get_exchange_rates(),
        ctx.client.get_top_news(),
    )?;

    println!("Indices");
    for (name, quote) in &indices {
        println!(
            "  {:<12} {:>10.2} {:>+9.2} {:>8}",
            name.to_uppercase(),
            quote.value,
            quote.change,
            format_percent(quote.change_percent)
        );
    }
    println!("Exchange rates");
    for rate in &rates {
        println!(
            "  {:<4} {:<8} {:>10.2} {:>8}",
            rate.currency,
            rate.country.as_deref().unwrap_or(""),
            rate.rate,
            format_percent(rate.change_percent)
        );
    }
    println!("Top news");
    for headline in &top_news {
        println!("  [{}] {}", headline.id, truncate_string(&headline.title, TITLE_WIDTH));
    }
    Ok(())
}

async fn bot(ctx: &Context, action: Option<BotAction>) -> Result<()> {
    if !enter(ctx, "/bot")? {
        return Ok(());
    }
    match action {
        Some(BotAction::On) => {
            ctx.client.toggle_bot(true).await?;
            println!("Trading bot enabled");
        }
        Some(BotAction::Off) => {
            ctx.client.toggle_bot(false).await?;
            println!("Trading bot disabled");
        }
        None => {
            let status = ctx.client.get_bot_status().await?;
            println!(
                "Bot {}  invested {}  valued {}  {}",
                if status.enabled { "ON" } else { "OFF" },
                format_amount(status.total_investment.round() as i64),
                format_amount(status.total_valuation.round() as i64),
                format_percent(status.profit_percent)
            );
            if let Some(stock) = status.current_stock {
                println!("Holding {} {} x {}", stock.symbol, stock.name, stock.quantity);
                let analysis = ctx.client.get_bot_analysis(&stock.symbol).await?;
                for point in analysis.points {
                    println!("  - {}: {}", point.title, point.content);
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Arc;

    use stockpilot_core::auth::{Session, StoreError, TokenStore};
    use stockpilot_core::config::ClientConfig;
    use stockpilot_core::routes::BuildMode;

    /// Holds a token that can never be removed.
    struct StuckStore;

    impl TokenStore for StuckStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(Some("abc".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Ok(())
        }

        fn delete(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "read-only")))
        }
    }

    #[tokio::test]
    async fn test_logout_reports_local_clear_failure() {
        // Nothing listens on the discard port, so the server call fails too
        let config = ClientConfig::with_base_url("http://127.0.0.1:9/api").unwrap();
        let session = Session::new(Arc::new(StuckStore));
        let client = ApiClient::new(&config, session.clone(), Arc::new(|_: &str| {})).unwrap();
        let mut ctx = Context {
            client,
            navigator: Navigator::new(session, BuildMode::Production),
            settings: Settings::default(),
        };

        let err = logout(&mut ctx, false).await.unwrap_err();
        assert_eq!(err.to_string(), "The local session could not be removed");
        assert!(err.downcast_ref::<StoreError>().is_some());
    }
}
