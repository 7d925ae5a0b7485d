use crate::catalog_client::ProductCatalogClient;
use auth::{
    abstract_trait::{
        auth::{DynIdentityService, DynLoginService, DynRegisterService},
        credential::DynCredentialRepository,
    },
    policy::AccessPolicy,
    repository::{CredentialRepository, SessionStore},
    service::{IdentityService, LoginService, LoginServiceDeps, RegisterService, RegisterServiceDeps},
};
use cart::{
    abstract_trait::cart::DynCartService,
    repository::{CartRepository, InMemoryBlobStore},
    service::CartService,
};
use order::{
    abstract_trait::{
        order::{
            repository::DynOrderCommandRepository,
            service::{DynOrderCommandService, DynOrderQueryService},
        },
        scoping::DynOrderScopingService,
    },
    repository::{OrderCommandRepository, OrderQueryRepository, OrderStore},
    service::{OrderCommandService, OrderQueryService, OrderScopingService},
};
use product::{
    abstract_trait::product::{
        repository::DynProductCommandRepository,
        service::{DynProductCommandService, DynProductQueryService},
    },
    repository::{ProductCommandRepository, ProductQueryRepository, ProductStore},
    service::{ProductCommandService, ProductQueryService},
};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::DynHashing,
    config::{Config, Hashing},
};
use std::{fmt, sync::Arc};
use user::{
    abstract_trait::{
        user::{
            repository::DynUserCommandRepository,
            service::{DynUserCommandService, DynUserQueryService},
        },
        vendor::{
            repository::DynVendorCommandRepository,
            service::{DynVendorCommandService, DynVendorQueryService},
        },
    },
    repository::{
        UserCommandRepository, UserQueryRepository, UserStore, VendorCommandRepository,
        VendorQueryRepository, VendorStore,
    },
    service::{UserCommandService, UserQueryService, VendorCommandService, VendorQueryService},
};

/// Raw write handles used to load records with fixed ids, bypassing service-side id
/// generation.
#[derive(Clone)]
pub struct SeedRepositories {
    pub users: DynUserCommandRepository,
    pub vendors: DynVendorCommandRepository,
    pub products: DynProductCommandRepository,
    pub orders: DynOrderCommandRepository,
    pub credentials: DynCredentialRepository,
    pub hash: DynHashing,
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub cart: DynCartService,
    pub product_command: DynProductCommandService,
    pub product_query: DynProductQueryService,
    pub order_command: DynOrderCommandService,
    pub order_query: DynOrderQueryService,
    pub order_scoping: DynOrderScopingService,
    pub user_command: DynUserCommandService,
    pub user_query: DynUserQueryService,
    pub vendor_command: DynVendorCommandService,
    pub vendor_query: DynVendorQueryService,
    pub login: DynLoginService,
    pub register: DynRegisterService,
    pub identity: DynIdentityService,
    pub policy: AccessPolicy,
    pub seed: SeedRepositories,
    pub config: Config,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("cart", &"CartService")
            .field("product_command", &"ProductCommandService")
            .field("product_query", &"ProductQueryService")
            .field("order_command", &"OrderCommandService")
            .field("order_query", &"OrderQueryService")
            .field("order_scoping", &"OrderScopingService")
            .field("user_command", &"UserCommandService")
            .field("user_query", &"UserQueryService")
            .field("vendor_command", &"VendorCommandService")
            .field("vendor_query", &"VendorQueryService")
            .field("login", &"LoginService")
            .field("register", &"RegisterService")
            .field("identity", &"IdentityService")
            .field("config", &self.config)
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(config: Config, registry: &mut Registry) -> Self {
        let hash: DynHashing = Arc::new(Hashing::new(config.bcrypt_cost));

        let cart_repo = Arc::new(CartRepository::new(Arc::new(InMemoryBlobStore::new())));
        let cart: DynCartService = Arc::new(CartService::new(cart_repo, registry));

        let product_store = ProductStore::new();
        let product_query_repo = Arc::new(ProductQueryRepository::new(product_store.clone()));
        let product_command_repo: DynProductCommandRepository =
            Arc::new(ProductCommandRepository::new(product_store));
        let product_query: DynProductQueryService =
            Arc::new(ProductQueryService::new(product_query_repo, registry));
        let product_command: DynProductCommandService = Arc::new(ProductCommandService::new(
            product_command_repo.clone(),
            registry,
        ));

        let order_store = OrderStore::new();
        let order_query_repo = Arc::new(OrderQueryRepository::new(order_store.clone()));
        let order_command_repo: DynOrderCommandRepository =
            Arc::new(OrderCommandRepository::new(order_store));
        let order_command: DynOrderCommandService = Arc::new(OrderCommandService::new(
            order_query_repo.clone(),
            order_command_repo.clone(),
            config.transition_policy,
            registry,
        ));
        let order_query: DynOrderQueryService =
            Arc::new(OrderQueryService::new(order_query_repo.clone(), registry));
        let catalog_client = Arc::new(ProductCatalogClient::new(product_query.clone()));
        let order_scoping: DynOrderScopingService = Arc::new(OrderScopingService::new(
            order_query_repo,
            catalog_client,
            registry,
        ));

        let user_store = UserStore::new();
        let user_query_repo = Arc::new(UserQueryRepository::new(user_store.clone()));
        let user_command_repo: DynUserCommandRepository =
            Arc::new(UserCommandRepository::new(user_store));
        let user_command: DynUserCommandService = Arc::new(UserCommandService::new(
            user_query_repo.clone(),
            user_command_repo.clone(),
            registry,
        ));
        let user_query: DynUserQueryService =
            Arc::new(UserQueryService::new(user_query_repo, registry));

        let vendor_store = VendorStore::new();
        let vendor_command_repo: DynVendorCommandRepository =
            Arc::new(VendorCommandRepository::new(vendor_store.clone()));
        let vendor_command: DynVendorCommandService = Arc::new(VendorCommandService::new(
            vendor_command_repo.clone(),
            registry,
        ));
        let vendor_query: DynVendorQueryService = Arc::new(VendorQueryService::new(
            Arc::new(VendorQueryRepository::new(vendor_store)),
            registry,
        ));

        let credentials: DynCredentialRepository = Arc::new(CredentialRepository::new());
        let sessions = Arc::new(SessionStore::new());
        let login: DynLoginService = Arc::new(LoginService::new(
            LoginServiceDeps {
                hash: hash.clone(),
                credentials: credentials.clone(),
                sessions: sessions.clone(),
                user_query: user_query.clone(),
            },
            registry,
        ));
        let register: DynRegisterService = Arc::new(RegisterService::new(
            RegisterServiceDeps {
                hash: hash.clone(),
                credentials: credentials.clone(),
                user_command: user_command.clone(),
            },
            registry,
        ));
        let identity: DynIdentityService =
            Arc::new(IdentityService::new(sessions, user_query.clone()));

        Self {
            cart,
            product_command,
            product_query,
            order_command,
            order_query,
            order_scoping,
            user_command,
            user_query,
            vendor_command,
            vendor_query,
            login,
            register,
            identity,
            policy: AccessPolicy::new(),
            seed: SeedRepositories {
                users: user_command_repo,
                vendors: vendor_command_repo,
                products: product_command_repo,
                orders: order_command_repo,
                credentials,
                hash,
            },
            config,
        }
    }
}
