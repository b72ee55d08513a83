use crate::{
    abstract_trait::{
        DynAuthService, DynCartService, DynEmailService, DynHashing, DynIncubateeService,
        DynJwtService, DynPricingUnitService, DynProductService, DynReportService,
        DynReservationService, DynUserService,
    },
    cache::CacheStore,
    config::{Config, ConnectionPool, RedisClient},
    repository::{
        CartRepository, IncubateeRepository, PricingUnitRepository, ProductRepository,
        ReportRepository, ReservationRepository, UserRepository,
    },
    service::{
        AuthService, CartService, EmailService, IncubateeService, PricingUnitService,
        ProductService, ReportService, ReservationService, UserService,
    },
};
use anyhow::Result;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub user_service: DynUserService,
    pub product_service: DynProductService,
    pub incubatee_service: DynIncubateeService,
    pub pricing_unit_service: DynPricingUnitService,
    pub reservation_service: DynReservationService,
    pub report_service: DynReportService,
    pub cart_service: DynCartService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"<AuthService>")
            .field("user_service", &"<UserService>")
            .field("product_service", &"<ProductService>")
            .field("incubatee_service", &"<IncubateeService>")
            .field("pricing_unit_service", &"<PricingUnitService>")
            .field("reservation_service", &"<ReservationService>")
            .field("report_service", &"<ReportService>")
            .field("cart_service", &"<CartService>")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub hash: DynHashing,
    pub jwt_config: DynJwtService,
    pub redis: RedisClient,
    pub config: Config,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps) -> Result<Self> {
        let DependenciesInjectDeps {
            pool,
            hash,
            jwt_config,
            redis,
            config,
        } = deps;

        let user_repository = UserRepository::new(pool.clone());
        let product_repository = ProductRepository::new(pool.clone());
        let incubatee_repository = IncubateeRepository::new(pool.clone());
        let reservation_repository = ReservationRepository::new(pool.clone());
        let pricing_unit_repository = Arc::new(PricingUnitRepository::new(pool.clone()));
        let cart_repository = Arc::new(CartRepository::new(pool.clone()));
        let report_repository = Arc::new(ReportRepository::new(pool.clone()));

        let cache = Arc::new(CacheStore::new(redis.pool.clone()));

        let email_service =
            Arc::new(EmailService::new(&config.email_config)?) as DynEmailService;

        let auth_service = Arc::new(AuthService::new(
            user_repository.query.clone(),
            user_repository.command.clone(),
            hash.clone(),
            jwt_config.clone(),
            cache.clone(),
        )) as DynAuthService;

        let user_service = Arc::new(UserService::new(
            user_repository.query.clone(),
            user_repository.command.clone(),
            hash.clone(),
        )) as DynUserService;

        let product_service = Arc::new(ProductService::new(
            product_repository.query.clone(),
            product_repository.command.clone(),
            incubatee_repository.query.clone(),
            email_service.clone(),
            config.upload_dir.clone(),
        )) as DynProductService;

        let incubatee_service = Arc::new(IncubateeService::new(
            incubatee_repository.query.clone(),
            incubatee_repository.command.clone(),
        )) as DynIncubateeService;

        let pricing_unit_service =
            Arc::new(PricingUnitService::new(pricing_unit_repository))
                as DynPricingUnitService;

        let reservation_service = Arc::new(ReservationService::new(
            reservation_repository.query.clone(),
            reservation_repository.command.clone(),
            product_repository.query.clone(),
            config.pickup_timeout_ms,
        )) as DynReservationService;

        let report_service = Arc::new(ReportService::new(
            report_repository,
            incubatee_repository.query.clone(),
        )) as DynReportService;

        let cart_service = Arc::new(CartService::new(
            cart_repository,
            product_repository.query.clone(),
        )) as DynCartService;

        Ok(Self {
            auth_service,
            user_service,
            product_service,
            incubatee_service,
            pricing_unit_service,
            reservation_service,
            report_service,
            cart_service,
        })
    }
}
