use anyhow::Result;
use tracing::Instrument;

use shipdesk::orders::{OrderBrowser, OrderCriteria, OrderStatus, PriorityFilter, StatusFilter, ViewType};
use shipdesk::telemetry::{create_session_span, generate_correlation_id};
use shipdesk::{config, SimulatedBackend};

use crate::cli::commands::Command;

pub struct OrdersCommand {
    pub criteria: OrderCriteria,
    pub view: Option<ViewType>,
    pub json: bool,
}

impl OrdersCommand {
    pub fn new(search: String, status: StatusFilter, priority: PriorityFilter) -> Self {
        Self {
            criteria: OrderCriteria::default()
                .with_search(search)
                .with_status(status)
                .with_priority(priority),
            view: None,
            json: false,
        }
    }

    pub fn with_view(mut self, view: Option<ViewType>) -> Self {
        self.view = view;
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    async fn run(&self) -> Result<()> {
        // JSON mode keeps stdout machine-readable
        let mut browser = load_browser(self.view, !self.json).await?;
        browser.set_criteria(self.criteria.clone());

        if self.json {
            println!("{}", serde_json::to_string_pretty(browser.filtered())?);
            return Ok(());
        }

        print!("{}", browser.render());
        print_summary(&browser);
        Ok(())
    }
}

impl Command for OrdersCommand {
    async fn execute(&self) -> Result<()> {
        let correlation_id = generate_correlation_id();
        let span = create_session_span("orders", Some(&correlation_id));
        self.run().instrument(span).await
    }
}

pub struct SetStatusCommand {
    pub order_id: String,
    pub status: OrderStatus,
    pub view: Option<ViewType>,
}

impl SetStatusCommand {
    pub fn new(order_id: String, status: OrderStatus) -> Self {
        Self {
            order_id,
            status,
            view: None,
        }
    }

    pub fn with_view(mut self, view: Option<ViewType>) -> Self {
        self.view = view;
        self
    }

    async fn run(&self) -> Result<()> {
        let mut browser = load_browser(self.view, true).await?;

        let previous = browser
            .orders()
            .iter()
            .find(|order| order.id == self.order_id)
            .map(|order| order.status);

        if let Err(e) = browser.update_order_status(&self.order_id, self.status) {
            println!("❌ {e}");
            println!("   → Run 'shipdesk orders --view table' to see order ids");
            return Err(e.into());
        }

        if let Some(notice) = browser.notifications_mut().dismiss() {
            println!("{notice}");
        }
        if let Some(previous) = previous {
            println!("   Order {}: {} → {}", self.order_id, previous, self.status);
        }
        println!();

        print!("{}", browser.render());
        print_summary(&browser);
        Ok(())
    }
}

impl Command for SetStatusCommand {
    async fn execute(&self) -> Result<()> {
        let correlation_id = generate_correlation_id();
        let span = create_session_span("set_status", Some(&correlation_id));
        self.run().instrument(span).await
    }
}

/// Load orders through the simulated backend into a fresh browser.
async fn load_browser(view: Option<ViewType>, show_progress: bool) -> Result<OrderBrowser> {
    let config = config()?;
    let backend = SimulatedBackend::from_config(&config.backend);
    let mut browser = OrderBrowser::new();
    browser.set_view(view.unwrap_or(config.orders.default_view));

    if show_progress {
        print!("🔄 Loading orders... ");
        std::io::Write::flush(&mut std::io::stdout())?;
    }

    match browser.load(&backend).await {
        Ok(count) if show_progress => println!("✅ {count} orders\n"),
        Ok(_) => {}
        Err(e) => {
            let notice = browser.notifications_mut().dismiss();
            if show_progress {
                println!("❌");
                if let Some(notice) = notice {
                    println!("{notice}");
                }
            } else if let Some(notice) = notice {
                eprintln!("{notice}");
            }
            return Err(e.into());
        }
    }
    Ok(browser)
}

fn print_summary(browser: &OrderBrowser) {
    let criteria = browser.criteria();
    println!();
    println!(
        "📊 Showing {} of {} orders (search: '{}', status: {}, priority: {}, view: {})",
        browser.filtered().len(),
        browser.orders().len(),
        criteria.search,
        criteria.status,
        criteria.priority,
        browser.view()
    );
}
