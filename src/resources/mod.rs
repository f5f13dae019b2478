//! Resource services
//!
//! One service per REST resource, all sharing the same `ApiClient` and
//! bearer-token store. `HostelApi` wires them together from settings.

pub mod auth;
pub mod blocks;
pub mod chat;
pub mod checkinout;
pub mod complaints;
pub mod finances;
pub mod notices;
pub mod rooms;
pub mod staff;
pub mod students;

pub use auth::AuthService;
pub use blocks::BlocksService;
pub use chat::ChatService;
pub use checkinout::CheckInOutService;
pub use complaints::ComplaintsService;
pub use finances::FinancesService;
pub use notices::NoticesService;
pub use rooms::RoomsService;
pub use staff::StaffService;
pub use students::StudentsService;

use crate::config::Settings;
use crate::http::ApiClient;
use crate::state::TokenStore;
use crate::utils::errors::Result;

/// Root handle: every resource service built on one shared client.
#[derive(Debug, Clone)]
pub struct HostelApi {
    pub auth: AuthService,
    pub blocks: BlocksService,
    pub rooms: RoomsService,
    pub students: StudentsService,
    pub staff: StaffService,
    pub notices: NoticesService,
    pub complaints: ComplaintsService,
    pub check_in_out: CheckInOutService,
    pub finances: FinancesService,
    pub chat: ChatService,
    client: ApiClient,
}

impl HostelApi {
    /// Create a new HostelApi with an empty token store.
    pub fn new(settings: &Settings) -> Result<Self> {
        Self::with_tokens(settings, TokenStore::new())
    }

    /// Create a new HostelApi around an existing token store, for callers
    /// that persist the bearer token across sessions.
    pub fn with_tokens(settings: &Settings, tokens: TokenStore) -> Result<Self> {
        let client = ApiClient::new(settings, tokens)?;

        Ok(Self {
            auth: AuthService::new(client.clone()),
            blocks: BlocksService::new(client.clone()),
            rooms: RoomsService::new(client.clone()),
            students: StudentsService::new(client.clone()),
            staff: StaffService::new(client.clone()),
            notices: NoticesService::new(client.clone()),
            complaints: ComplaintsService::new(client.clone()),
            check_in_out: CheckInOutService::new(client.clone()),
            finances: FinancesService::new(client.clone()),
            chat: ChatService::new(client.clone()),
            client,
        })
    }

    /// The shared HTTP client.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Resolve a stored attachment path against the configured host.
    pub fn image_url(&self, path: Option<&str>) -> String {
        self.client.file_url(path)
    }

    /// Whether a bearer token is currently stored.
    pub fn is_authenticated(&self) -> bool {
        self.client.tokens().is_authenticated()
    }
}
