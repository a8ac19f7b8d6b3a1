//! # State Module
//!
//! Per-session application state.
//!
//! ## Why Multiple State Types?
//! Instead of one `AppState` struct behind one lock, each concern gets its
//! own state type:
//!
//! 1. **Separation of Concerns**: Each state type has a single responsibility
//! 2. **Clear Command Signatures**: Commands declare exactly what they touch
//! 3. **Reduced Contention**: Browsing the catalog never waits on the cart
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Session                                                                │
//! │  ├── CartState      Arc<Mutex<Cart>>          exclusive per operation  │
//! │  ├── CatalogState   Arc<Catalog>              read-only                │
//! │  ├── OrderState     Arc<Mutex<OrderHistory>>  exclusive per operation  │
//! │  ├── ProfileState   Arc<Mutex<ProfileEditor>> exclusive per operation  │
//! │  └── ConfigState    plain struct              read-only                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no module-level global: the session is created once in `run()`
//! and handed to every command by reference.

mod cart;
mod catalog;
mod config;
mod orders;
mod profile;

pub use cart::{CartResponse, CartState, CartTotals};
pub use catalog::CatalogState;
pub use config::ConfigState;
pub use orders::OrderState;
pub use profile::ProfileState;

use storefront_core::{Catalog, OrderHistory, ProfileEditor, UserProfile};
use uuid::Uuid;

/// Everything one storefront session owns.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    pub cart: CartState,
    pub catalog: CatalogState,
    pub orders: OrderState,
    pub profile: ProfileState,
    pub config: ConfigState,
}

impl Session {
    /// Creates a session with an empty cart.
    ///
    /// With `config.demo_data` the catalog, order history and profile are
    /// seeded from the demo data; otherwise they start empty.
    pub fn new(config: ConfigState) -> Self {
        let (catalog, orders, profile) = if config.demo_data {
            let catalog = Catalog::mock();
            let orders = OrderHistory::mock(&catalog);
            (catalog, orders, ProfileEditor::mock())
        } else {
            (
                Catalog::default(),
                OrderHistory::new(),
                ProfileEditor::new(UserProfile::default()),
            )
        };

        Session {
            id: Uuid::new_v4(),
            cart: CartState::new(),
            catalog: CatalogState::new(catalog),
            orders: OrderState::new(orders),
            profile: ProfileState::new(profile),
            config,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ConfigState::default())
    }
}
