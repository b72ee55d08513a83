#![allow(dead_code)]

//! In-memory stand-ins for the repository seams. Each fake keeps its rows
//! behind a Mutex and mirrors the status predicates the SQL layer enforces,
//! so the services are exercised against the same conflict paths they see
//! in production.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, Utc};
use shared::abstract_trait::{
    CartRepositoryTrait, EmailServiceTrait, IncubateeCommandRepositoryTrait,
    IncubateeQueryRepositoryTrait, LowStockEmail, PricingUnitRepositoryTrait,
    ProductCommandRepositoryTrait, ProductQueryRepositoryTrait, ReportRepositoryTrait,
    ReservationCommandRepositoryTrait, ReservationQueryRepositoryTrait,
    UserCommandRepositoryTrait, UserQueryRepositoryTrait,
};
use shared::cache::CacheStore;
use shared::domain::requests::{
    CreateIncubateeRequest, CreatePricingUnitRequest, CreateProductRequest,
    CreateReservationRequest, CreateUserData, FindAllProducts, ReportQuery,
    UpdateIncubateeRequest, UpdateProfileRequest,
};
use shared::domain::responses::{CategoryBreakdown, IncubateeBreakdown, ReportRow};
use shared::errors::{RepositoryError, ServiceError};
use shared::model::{
    CartItem, CartItemDetail, Incubatee, IncubateeWithStats, PricingUnit, Product,
    ProductWithIncubatee, Reservation, ReservationDetail, SalesLine, STATUS_APPROVED,
    STATUS_COMPLETED, STATUS_PENDING, STATUS_REJECTED, User,
};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Cache store over a pool that cannot connect. Every operation degrades
/// to a miss, which is how a Redis outage behaves in production.
pub fn unreachable_cache() -> Arc<CacheStore> {
    let pool = deadpool_redis::Config::from_url("redis://127.0.0.1:1/")
        .create_pool(Some(deadpool_redis::Runtime::Tokio1))
        .expect("lazy pool creation does not connect");
    Arc::new(CacheStore::new(pool))
}

pub fn product(id: i32, incubatee_id: i32, name: &str, stock: i32, price: f64) -> ProductWithIncubatee {
    ProductWithIncubatee {
        product_id: id,
        incubatee_id,
        name: name.to_string(),
        stock_no: None,
        category: "Food".to_string(),
        products: None,
        stock_amount: stock,
        price_per_stocks: price,
        pricing_unit: "piece".to_string(),
        expiration_date: None,
        warranty: None,
        image_path: None,
        added_on: Some(now()),
        company_name: format!("Company {incubatee_id}"),
    }
}

pub fn incubatee(id: i32, company: &str, email: &str) -> Incubatee {
    Incubatee {
        incubatee_id: id,
        first_name: "Ana".to_string(),
        middle_name: None,
        last_name: "Reyes".to_string(),
        company_name: company.to_string(),
        email: email.to_string(),
        phone: "09171234567".to_string(),
        batch: "2024".to_string(),
        is_approved: false,
        logo_path: None,
        created_at: Some(now()),
    }
}

pub fn user(id: i32, username: &str, email: &str, role: &str, password_hash: &str) -> User {
    User {
        user_id: id,
        username: username.to_string(),
        email: email.to_string(),
        phone: None,
        password: password_hash.to_string(),
        role: role.to_string(),
        created_at: Some(now()),
        updated_at: None,
    }
}

pub fn reservation_detail(
    id: i32,
    user_id: i32,
    product_id: i32,
    status: &str,
    reserved_at: NaiveDateTime,
) -> ReservationDetail {
    ReservationDetail {
        reservation_id: id,
        user_id,
        product_id,
        product_name: format!("product {product_id}"),
        username: format!("user {user_id}"),
        quantity: 1,
        price_per_stocks: 10.0,
        status: status.to_string(),
        reserved_at,
        rejected_reason: None,
        completed_at: None,
    }
}

pub fn report_row(
    id: i32,
    product_name: &str,
    company_name: &str,
    category: &str,
    quantity: i32,
    price: f64,
) -> ReportRow {
    ReportRow {
        reservation_id: id,
        date: Some("2024-05-10".to_string()),
        product_name: product_name.to_string(),
        company_name: company_name.to_string(),
        category: category.to_string(),
        quantity,
        price_per_stocks: price,
        subtotal: price * f64::from(quantity),
    }
}

fn to_product(row: &ProductWithIncubatee) -> Product {
    Product {
        product_id: row.product_id,
        incubatee_id: row.incubatee_id,
        name: row.name.clone(),
        stock_no: row.stock_no.clone(),
        category: row.category.clone(),
        products: row.products.clone(),
        stock_amount: row.stock_amount,
        price_per_stocks: row.price_per_stocks,
        pricing_unit: row.pricing_unit.clone(),
        expiration_date: row.expiration_date,
        warranty: row.warranty.clone(),
        image_path: row.image_path.clone(),
        added_on: row.added_on,
    }
}

fn to_reservation(detail: &ReservationDetail) -> Reservation {
    Reservation {
        reservation_id: detail.reservation_id,
        user_id: detail.user_id,
        product_id: detail.product_id,
        quantity: detail.quantity,
        price_per_stocks: detail.price_per_stocks,
        status: detail.status.clone(),
        reserved_at: detail.reserved_at,
        rejected_reason: detail.rejected_reason.clone(),
        completed_at: detail.completed_at,
    }
}

#[derive(Default)]
pub struct MockProducts {
    rows: Mutex<Vec<ProductWithIncubatee>>,
    companies: Mutex<HashMap<i32, String>>,
    next_id: Mutex<i32>,
}

impl MockProducts {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn seed(&self, row: ProductWithIncubatee) {
        let mut next = self.next_id.lock().unwrap();
        *next = (*next).max(row.product_id);
        self.rows.lock().unwrap().push(row);
    }

    pub fn set_company(&self, incubatee_id: i32, name: &str) {
        self.companies
            .lock()
            .unwrap()
            .insert(incubatee_id, name.to_string());
    }

    pub fn stock_of(&self, id: i32) -> i32 {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.product_id == id)
            .map(|row| row.stock_amount)
            .unwrap_or(-1)
    }

    pub fn name_of(&self, id: i32) -> String {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.product_id == id)
            .map(|row| row.name.clone())
            .unwrap_or_else(|| format!("product {id}"))
    }

    pub fn price_of(&self, id: i32) -> f64 {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.product_id == id)
            .map(|row| row.price_per_stocks)
            .unwrap_or(0.0)
    }

    /// Stock claim with the same guarded predicate the SQL update uses.
    pub fn claim_stock(&self, product_id: i32, quantity: i32) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.product_id == product_id && row.stock_amount >= quantity);

        match row {
            Some(row) => {
                row.stock_amount -= quantity;
                Ok(())
            }
            None => Err(RepositoryError::Conflict(format!(
                "Insufficient stock for product {product_id}"
            ))),
        }
    }

    pub fn release_stock(&self, product_id: i32, quantity: i32) {
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|row| row.product_id == product_id) {
            row.stock_amount += quantity;
        }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for MockProducts {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<Vec<ProductWithIncubatee>, RepositoryError> {
        let needle = req.search.to_lowercase();
        let mut rows: Vec<ProductWithIncubatee> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| needle.is_empty() || row.name.to_lowercase().contains(&needle))
            .filter(|row| !req.low_stock || row.stock_amount <= 10)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.product_id.cmp(&a.product_id));
        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.product_id == id)
            .map(to_product))
    }

    async fn find_with_incubatee(
        &self,
        id: i32,
    ) -> Result<Option<ProductWithIncubatee>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.product_id == id)
            .cloned())
    }

    async fn find_low_stock(
        &self,
        threshold: i32,
    ) -> Result<Vec<ProductWithIncubatee>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| row.stock_amount <= threshold)
            .cloned()
            .collect())
    }

    async fn find_featured(
        &self,
        limit: i64,
    ) -> Result<Vec<ProductWithIncubatee>, RepositoryError> {
        let mut rows: Vec<ProductWithIncubatee> = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.product_id.cmp(&a.product_id));
        rows.truncate(limit as usize);
        Ok(rows)
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for MockProducts {
    async fn create(
        &self,
        req: &CreateProductRequest,
        image_path: Option<String>,
    ) -> Result<Product, RepositoryError> {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;

        let company_name = self
            .companies
            .lock()
            .unwrap()
            .get(&req.incubatee_id)
            .cloned()
            .unwrap_or_else(|| format!("Company {}", req.incubatee_id));

        let row = ProductWithIncubatee {
            product_id: *next,
            incubatee_id: req.incubatee_id,
            name: req.name.clone(),
            stock_no: req.stock_no.clone(),
            category: req.category.clone(),
            products: req.products.clone(),
            stock_amount: req.stock_amount,
            price_per_stocks: req.price_per_stocks,
            pricing_unit: req.pricing_unit.clone(),
            expiration_date: req.expiration_date,
            warranty: req.warranty.clone(),
            image_path,
            added_on: Some(now()),
            company_name,
        };

        let product = to_product(&row);
        self.rows.lock().unwrap().push(row);
        Ok(product)
    }

    async fn delete(&self, id: i32) -> Result<Product, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let position = rows
            .iter()
            .position(|row| row.product_id == id)
            .ok_or(RepositoryError::NotFound)?;
        Ok(to_product(&rows.remove(position)))
    }
}

pub struct MockReservations {
    products: Arc<MockProducts>,
    rows: Mutex<Vec<ReservationDetail>>,
    next_id: Mutex<i32>,
}

impl MockReservations {
    pub fn new(products: Arc<MockProducts>) -> Arc<Self> {
        Arc::new(Self {
            products,
            rows: Mutex::new(Vec::new()),
            next_id: Mutex::new(0),
        })
    }

    pub fn seed(&self, detail: ReservationDetail) {
        let mut next = self.next_id.lock().unwrap();
        *next = (*next).max(detail.reservation_id);
        self.rows.lock().unwrap().push(detail);
    }

    pub fn status_of(&self, id: i32) -> String {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.reservation_id == id)
            .map(|row| row.status.clone())
            .unwrap_or_default()
    }

    pub fn reason_of(&self, id: i32) -> Option<String> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.reservation_id == id)
            .and_then(|row| row.rejected_reason.clone())
    }
}

#[async_trait]
impl ReservationQueryRepositoryTrait for MockReservations {
    async fn find_all(&self) -> Result<Vec<ReservationDetail>, RepositoryError> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.reservation_id.cmp(&a.reservation_id));
        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Reservation>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.reservation_id == id)
            .map(to_reservation))
    }

    async fn find_detail_by_id(
        &self,
        id: i32,
    ) -> Result<Option<ReservationDetail>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.reservation_id == id)
            .cloned())
    }

    async fn find_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<ReservationDetail>, RepositoryError> {
        let mut rows: Vec<ReservationDetail> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| row.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.reservation_id.cmp(&a.reservation_id));
        Ok(rows)
    }

    async fn find_completed_on(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<SalesLine>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| {
                row.status == STATUS_COMPLETED
                    && row.completed_at.is_some_and(|at| at.date() == date)
            })
            .map(|row| SalesLine {
                reservation_id: row.reservation_id,
                product_name: row.product_name.clone(),
                username: row.username.clone(),
                quantity: row.quantity,
                price_per_stocks: row.price_per_stocks,
                completed_at: row.completed_at,
            })
            .collect())
    }
}

#[async_trait]
impl ReservationCommandRepositoryTrait for MockReservations {
    async fn create(
        &self,
        user_id: i32,
        req: &CreateReservationRequest,
        price_per_stocks: f64,
    ) -> Result<Reservation, RepositoryError> {
        self.products.claim_stock(req.product_id, req.quantity)?;

        let mut next = self.next_id.lock().unwrap();
        *next += 1;

        let detail = ReservationDetail {
            reservation_id: *next,
            user_id,
            product_id: req.product_id,
            product_name: self.products.name_of(req.product_id),
            username: format!("user {user_id}"),
            quantity: req.quantity,
            price_per_stocks,
            status: STATUS_PENDING.to_string(),
            reserved_at: now(),
            rejected_reason: None,
            completed_at: None,
        };

        let reservation = to_reservation(&detail);
        self.rows.lock().unwrap().push(detail);
        Ok(reservation)
    }

    async fn approve(&self, id: i32) -> Result<Reservation, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.reservation_id == id && row.status == STATUS_PENDING)
            .ok_or_else(|| {
                RepositoryError::Conflict(format!("Reservation {id} is no longer pending"))
            })?;
        row.status = STATUS_APPROVED.to_string();
        Ok(to_reservation(row))
    }

    async fn reject(&self, id: i32, reason: String) -> Result<Reservation, RepositoryError> {
        let released = {
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|row| {
                    row.reservation_id == id
                        && matches!(row.status.as_str(), STATUS_PENDING | STATUS_APPROVED)
                })
                .ok_or_else(|| {
                    RepositoryError::Conflict(format!("Reservation {id} is already settled"))
                })?;
            row.status = STATUS_REJECTED.to_string();
            row.rejected_reason = Some(reason);
            (row.product_id, row.quantity, to_reservation(row))
        };

        self.products.release_stock(released.0, released.1);
        Ok(released.2)
    }

    async fn complete(&self, id: i32) -> Result<Reservation, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.reservation_id == id && row.status == STATUS_APPROVED)
            .ok_or_else(|| {
                RepositoryError::Conflict(format!("Reservation {id} is not approved"))
            })?;
        row.status = STATUS_COMPLETED.to_string();
        row.completed_at = Some(now());
        Ok(to_reservation(row))
    }

    async fn approve_all_pending(&self) -> Result<u64, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let mut changed = 0;
        for row in rows.iter_mut().filter(|row| row.status == STATUS_PENDING) {
            row.status = STATUS_APPROVED.to_string();
            changed += 1;
        }
        Ok(changed)
    }

    async fn reject_approved_before(
        &self,
        cutoff: NaiveDateTime,
        reason: String,
    ) -> Result<u64, RepositoryError> {
        let swept: Vec<(i32, i32)> = {
            let mut rows = self.rows.lock().unwrap();
            let mut swept = Vec::new();
            for row in rows
                .iter_mut()
                .filter(|row| row.status == STATUS_APPROVED && row.reserved_at < cutoff)
            {
                row.status = STATUS_REJECTED.to_string();
                row.rejected_reason = Some(reason.clone());
                swept.push((row.product_id, row.quantity));
            }
            swept
        };

        for (product_id, quantity) in &swept {
            self.products.release_stock(*product_id, *quantity);
        }
        Ok(swept.len() as u64)
    }
}

#[derive(Default)]
pub struct MockUsers {
    rows: Mutex<Vec<User>>,
    stats: Mutex<HashMap<i32, Vec<(String, i64)>>>,
    next_id: Mutex<i32>,
}

impl MockUsers {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn seed(&self, row: User) {
        let mut next = self.next_id.lock().unwrap();
        *next = (*next).max(row.user_id);
        self.rows.lock().unwrap().push(row);
    }

    pub fn set_stats(&self, user_id: i32, rows: Vec<(String, i64)>) {
        self.stats.lock().unwrap().insert(user_id, rows);
    }

    pub fn password_of(&self, user_id: i32) -> String {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.user_id == user_id)
            .map(|row| row.password.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for MockUsers {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.user_id == id)
            .cloned())
    }

    async fn find_by_username(&self, username: String) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.username == username)
            .cloned())
    }

    async fn find_by_email(&self, email: String) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.email == email)
            .cloned())
    }

    async fn count_reservations_by_status(
        &self,
        user_id: i32,
    ) -> Result<Vec<(String, i64)>, RepositoryError> {
        Ok(self
            .stats
            .lock()
            .unwrap()
            .get(&user_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for MockUsers {
    async fn create_user(&self, data: &CreateUserData) -> Result<User, RepositoryError> {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;

        let row = User {
            user_id: *next,
            username: data.username.clone(),
            email: data.email.clone(),
            phone: data.phone.clone(),
            password: data.password.clone(),
            role: data.role.clone(),
            created_at: Some(now()),
            updated_at: None,
        };

        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update_profile(
        &self,
        user_id: i32,
        req: &UpdateProfileRequest,
    ) -> Result<User, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.user_id == user_id)
            .ok_or(RepositoryError::NotFound)?;
        row.username = req.username.clone();
        row.email = req.email.clone();
        row.phone = req.phone.clone();
        row.updated_at = Some(now());
        Ok(row.clone())
    }

    async fn update_password(
        &self,
        user_id: i32,
        password_hash: String,
    ) -> Result<User, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.user_id == user_id)
            .ok_or(RepositoryError::NotFound)?;
        row.password = password_hash;
        row.updated_at = Some(now());
        Ok(row.clone())
    }
}

#[derive(Default)]
pub struct MockIncubatees {
    rows: Mutex<Vec<Incubatee>>,
    stats: Mutex<HashMap<i32, (i64, f64)>>,
    next_id: Mutex<i32>,
}

impl MockIncubatees {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn seed(&self, row: Incubatee) {
        let mut next = self.next_id.lock().unwrap();
        *next = (*next).max(row.incubatee_id);
        self.rows.lock().unwrap().push(row);
    }

    pub fn set_stats(&self, incubatee_id: i32, product_count: i64, total_sales: f64) {
        self.stats
            .lock()
            .unwrap()
            .insert(incubatee_id, (product_count, total_sales));
    }

    pub fn email_of(&self, id: i32) -> String {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.incubatee_id == id)
            .map(|row| row.email.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl IncubateeQueryRepositoryTrait for MockIncubatees {
    async fn find_all(&self) -> Result<Vec<Incubatee>, RepositoryError> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| a.company_name.cmp(&b.company_name));
        Ok(rows)
    }

    async fn find_with_stats(&self) -> Result<Vec<IncubateeWithStats>, RepositoryError> {
        let stats = self.stats.lock().unwrap();
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .map(|row| {
                let (product_count, total_sales) =
                    stats.get(&row.incubatee_id).copied().unwrap_or((0, 0.0));
                IncubateeWithStats {
                    incubatee_id: row.incubatee_id,
                    first_name: row.first_name.clone(),
                    middle_name: row.middle_name.clone(),
                    last_name: row.last_name.clone(),
                    company_name: row.company_name.clone(),
                    email: row.email.clone(),
                    phone: row.phone.clone(),
                    batch: row.batch.clone(),
                    is_approved: row.is_approved,
                    logo_path: row.logo_path.clone(),
                    created_at: row.created_at,
                    product_count,
                    total_sales,
                }
            })
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Incubatee>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.incubatee_id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: String) -> Result<Option<Incubatee>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.email == email)
            .cloned())
    }
}

#[async_trait]
impl IncubateeCommandRepositoryTrait for MockIncubatees {
    async fn create(
        &self,
        req: &CreateIncubateeRequest,
        logo_path: Option<String>,
    ) -> Result<Incubatee, RepositoryError> {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;

        let row = Incubatee {
            incubatee_id: *next,
            first_name: req.first_name.clone(),
            middle_name: req.middle_name.clone(),
            last_name: req.last_name.clone(),
            company_name: req.company_name.clone(),
            email: req.email.clone(),
            phone: req.phone.clone(),
            batch: req.batch.clone(),
            is_approved: false,
            logo_path,
            created_at: Some(now()),
        };

        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateIncubateeRequest,
        logo_path: Option<String>,
    ) -> Result<Incubatee, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.incubatee_id == id)
            .ok_or(RepositoryError::NotFound)?;

        if let Some(first_name) = &req.first_name {
            row.first_name = first_name.clone();
        }
        if let Some(middle_name) = &req.middle_name {
            row.middle_name = Some(middle_name.clone());
        }
        if let Some(last_name) = &req.last_name {
            row.last_name = last_name.clone();
        }
        if let Some(company_name) = &req.company_name {
            row.company_name = company_name.clone();
        }
        if let Some(email) = &req.email {
            row.email = email.clone();
        }
        if let Some(phone) = &req.phone {
            row.phone = phone.clone();
        }
        if let Some(batch) = &req.batch {
            row.batch = batch.clone();
        }
        if logo_path.is_some() {
            row.logo_path = logo_path;
        }

        Ok(row.clone())
    }

    async fn toggle_approval(&self, id: i32) -> Result<Incubatee, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.incubatee_id == id)
            .ok_or(RepositoryError::NotFound)?;
        row.is_approved = !row.is_approved;
        Ok(row.clone())
    }
}

pub struct MockCart {
    products: Arc<MockProducts>,
    rows: Mutex<Vec<CartItem>>,
    next_id: Mutex<i32>,
}

impl MockCart {
    pub fn new(products: Arc<MockProducts>) -> Arc<Self> {
        Arc::new(Self {
            products,
            rows: Mutex::new(Vec::new()),
            next_id: Mutex::new(0),
        })
    }

    pub fn quantity_of(&self, user_id: i32, product_id: i32) -> i32 {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.user_id == user_id && row.product_id == product_id)
            .map(|row| row.quantity)
            .unwrap_or(0)
    }
}

#[async_trait]
impl CartRepositoryTrait for MockCart {
    async fn find_items(&self, user_id: i32) -> Result<Vec<CartItemDetail>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| row.user_id == user_id)
            .map(|row| CartItemDetail {
                cart_item_id: row.cart_item_id,
                user_id: row.user_id,
                product_id: row.product_id,
                product_name: self.products.name_of(row.product_id),
                quantity: row.quantity,
                price_per_stocks: self.products.price_of(row.product_id),
                stock_amount: self.products.stock_of(row.product_id),
            })
            .collect())
    }

    async fn upsert_item(
        &self,
        user_id: i32,
        product_id: i32,
        quantity: i32,
        max_quantity: i32,
    ) -> Result<CartItem, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();

        if let Some(row) = rows
            .iter_mut()
            .find(|row| row.user_id == user_id && row.product_id == product_id)
        {
            row.quantity = (row.quantity + quantity).min(max_quantity);
            return Ok(row.clone());
        }

        let mut next = self.next_id.lock().unwrap();
        *next += 1;

        let row = CartItem {
            cart_item_id: *next,
            user_id,
            product_id,
            quantity: quantity.min(max_quantity),
            added_at: Some(now()),
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn count_items(&self, user_id: i32) -> Result<i64, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| row.user_id == user_id)
            .count() as i64)
    }
}

#[derive(Default)]
pub struct MockPricingUnits {
    rows: Mutex<Vec<PricingUnit>>,
    next_id: Mutex<i32>,
}

impl MockPricingUnits {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl PricingUnitRepositoryTrait for MockPricingUnits {
    async fn find_all(&self) -> Result<Vec<PricingUnit>, RepositoryError> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| a.unit_name.cmp(&b.unit_name));
        Ok(rows)
    }

    async fn find_by_name(&self, name: String) -> Result<Option<PricingUnit>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.unit_name == name)
            .cloned())
    }

    async fn create(
        &self,
        req: &CreatePricingUnitRequest,
    ) -> Result<PricingUnit, RepositoryError> {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;

        let row = PricingUnit {
            unit_id: *next,
            unit_name: req.unit_name.clone(),
            unit_description: req.unit_description.clone(),
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }
}

/// Canned report rows plus a record of the last filter received, so tests
/// can check the filters are handed through untouched.
#[derive(Default)]
pub struct MockReports {
    pub rows: Mutex<Vec<ReportRow>>,
    pub by_category: Mutex<Vec<CategoryBreakdown>>,
    pub by_incubatee: Mutex<Vec<IncubateeBreakdown>>,
    pub categories: Mutex<Vec<String>>,
    pub last_filter: Mutex<Option<ReportQuery>>,
}

impl MockReports {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl ReportRepositoryTrait for MockReports {
    async fn sales_rows(&self, filter: &ReportQuery) -> Result<Vec<ReportRow>, RepositoryError> {
        *self.last_filter.lock().unwrap() = Some(filter.clone());
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn category_breakdown(
        &self,
        _filter: &ReportQuery,
    ) -> Result<Vec<CategoryBreakdown>, RepositoryError> {
        Ok(self.by_category.lock().unwrap().clone())
    }

    async fn incubatee_breakdown(
        &self,
        _filter: &ReportQuery,
    ) -> Result<Vec<IncubateeBreakdown>, RepositoryError> {
        Ok(self.by_incubatee.lock().unwrap().clone())
    }

    async fn summary_totals(
        &self,
        filter: &ReportQuery,
    ) -> Result<(f64, i64, i64, i64), RepositoryError> {
        *self.last_filter.lock().unwrap() = Some(filter.clone());
        let rows = self.rows.lock().unwrap();
        let total_sales = rows.iter().map(|row| row.subtotal).sum();
        let units_sold = rows.iter().map(|row| i64::from(row.quantity)).sum();
        let products_sold = rows
            .iter()
            .map(|row| row.product_name.as_str())
            .collect::<HashSet<_>>()
            .len() as i64;
        Ok((total_sales, rows.len() as i64, units_sold, products_sold))
    }

    async fn distinct_categories(&self) -> Result<Vec<String>, RepositoryError> {
        Ok(self.categories.lock().unwrap().clone())
    }
}

/// Records every notice instead of talking SMTP; companies listed in
/// `failing` answer with a transport error.
#[derive(Default)]
pub struct MockEmail {
    pub sent: Mutex<Vec<LowStockEmail>>,
    failing: Mutex<HashSet<String>>,
}

impl MockEmail {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn fail_for(&self, company: &str) {
        self.failing.lock().unwrap().insert(company.to_string());
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl EmailServiceTrait for MockEmail {
    async fn send_low_stock(&self, req: &LowStockEmail) -> Result<(), ServiceError> {
        if self.failing.lock().unwrap().contains(&req.company_name) {
            return Err(ServiceError::Email("connection refused".to_string()));
        }

        self.sent.lock().unwrap().push(LowStockEmail {
            to: req.to.clone(),
            company_name: req.company_name.clone(),
            items: req.items.clone(),
        });
        Ok(())
    }
}
