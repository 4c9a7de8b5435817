use clap::{Parser, Subcommand};
use std::path::PathBuf;

use shipdesk::orders::{OrderStatus, PriorityFilter, StatusFilter, ViewType};

pub mod commands;

#[derive(Parser)]
#[command(name = "shipdesk")]
#[command(about = "Product entry and open-order browsing from the terminal")]
#[command(long_about = "shipdesk validates and submits product/shipment records and lets you browse \
                       open orders as cards, a table, a kanban board or a timeline. Get started with \
                       'shipdesk orders' to see what is in flight.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List open orders, filtered and laid out in one of the four views
    Orders {
        /// Case-insensitive text matched against order number, product and customer
        #[arg(long, short = 's', default_value = "", help = "Search order number, product name or customer name")]
        search: String,
        /// Status to keep, or 'all'
        #[arg(long, default_value = "all", help = "pending, processing, shipped, delivered, cancelled or all")]
        status: StatusFilter,
        /// Priority to keep, or 'all'
        #[arg(long, default_value = "all", help = "low, medium, high, urgent or all")]
        priority: PriorityFilter,
        /// Layout for the results
        #[arg(long, help = "card, table, kanban or timeline (defaults to the configured view)")]
        view: Option<ViewType>,
        /// Print the filtered orders as JSON
        #[arg(long, help = "Emit the filtered orders as JSON instead of a view")]
        json: bool,
    },
    /// Change the status of one order, then show the updated list
    SetStatus {
        /// Id of the order to update
        order_id: String,
        /// New status (any status may follow any other)
        status: OrderStatus,
        /// Layout for the updated list
        #[arg(long, help = "card, table, kanban or timeline (defaults to the configured view)")]
        view: Option<ViewType>,
    },
    /// Fill in the product form and submit it
    Submit {
        /// Field assignments such as name=Lamp or fromAddress.city=Austin
        #[arg(long = "set", value_name = "PATH=VALUE", help = "Set one form field; repeat for more fields")]
        set: Vec<String>,
        /// TOML file holding the product fields (applied before --set)
        #[arg(long, help = "Read field values from a TOML file")]
        file: Option<PathBuf>,
    },
    /// Check the product form without submitting it
    Validate {
        #[arg(long = "set", value_name = "PATH=VALUE", help = "Set one form field; repeat for more fields")]
        set: Vec<String>,
        #[arg(long, help = "Read field values from a TOML file")]
        file: Option<PathBuf>,
    },
}
