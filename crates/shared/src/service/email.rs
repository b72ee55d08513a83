use crate::{
    abstract_trait::{EmailServiceTrait, LowStockEmail},
    config::EmailConfig,
    errors::ServiceError,
    utils::render_low_stock_email,
};
use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Tokio1Executor,
    message::{Mailbox, Message, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use tracing::{error, info};

type SmtpTransport = AsyncSmtpTransport<Tokio1Executor>;

#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
    from: Mailbox,
}

impl EmailService {
    pub fn new(config: &EmailConfig) -> Result<Self, ServiceError> {
        let creds = Credentials::new(config.smtp_user.clone(), config.smtp_pass.clone());

        let mailer = SmtpTransport::starttls_relay(&config.smtp_server)?
            .credentials(creds)
            .port(config.smtp_port)
            .build();

        let from: Mailbox = config
            .smtp_from
            .parse()
            .map_err(|e| ServiceError::Email(format!("Invalid sender address: {e}")))?;

        Ok(Self { mailer, from })
    }
}

#[async_trait]
impl EmailServiceTrait for EmailService {
    async fn send_low_stock(&self, req: &LowStockEmail) -> Result<(), ServiceError> {
        info!("📧 Sending low-stock notice to {}", req.to);

        let body = render_low_stock_email(&req.company_name, &req.items)?;

        let to: Mailbox = req.to.parse().map_err(|e| {
            error!("❌ Invalid recipient email: {}", e);
            ServiceError::Email(format!("Invalid recipient email: {e}"))
        })?;

        let email = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(format!("Low stock alert for {}", req.company_name))
            .header(ContentType::TEXT_HTML)
            .body(body)
            .map_err(|e| {
                error!("❌ Failed to build email: {}", e);
                ServiceError::Email(format!("Failed to build email: {e}"))
            })?;

        self.mailer.send(email).await.map_err(|e| {
            error!("❌ Failed to send email to {}: {}", req.to, e);
            ServiceError::from(e)
        })?;

        info!("✅ Low-stock notice sent to {}", req.to);

        Ok(())
    }
}
