use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use client::net::types::{
    AppointmentStatus, CreateMedicalRecordRequest, LoginRequest, ProfileUpdate, RegisterRequest,
    Role, UpdateAppointmentRequest,
};
use client::net::{analytics, appointments, doctor, notifications, patient};
use client::{
    ApiClient, ApiError, AuthSession, DASHBOARD_PATH, FileTokenStore, RouteDecision,
    protected_route, public_route,
};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not logged in; run `healthiq auth login` first")]
    LoginRequired,
    #[error("this command is not available for the {0} role")]
    RoleNotAllowed(Role),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("invalid JSON output: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "healthiq", about = "HealthIQ dashboard and API CLI")]
struct Cli {
    #[arg(long, env = "HEALTHIQ_API_URL", default_value = "http://localhost:8000/api")]
    api_url: String,

    #[arg(long, env = "HEALTHIQ_TOKEN_FILE")]
    token_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

struct CliContext {
    api: ApiClient,
    session: AuthSession,
}

#[derive(Subcommand, Debug)]
enum Command {
    Auth(AuthCommand),
    /// Render the dashboard for the signed-in role.
    Dashboard,
    Patient(PatientCommand),
    Doctor(DoctorCommand),
    Appointment(AppointmentCommand),
    Analytics(AnalyticsCommand),
    Notifications(NotificationsCommand),
}

#[derive(Args, Debug)]
struct AuthCommand {
    #[command(subcommand)]
    command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
enum AuthSubcommand {
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        dob: Option<String>,
        #[arg(long)]
        gender: Option<String>,
        #[arg(long)]
        blood_group: Option<String>,
        #[arg(long)]
        region: Option<String>,
        #[arg(long)]
        role: Option<Role>,
    },
    Logout,
    Me,
}

#[derive(Args, Debug)]
struct PatientCommand {
    #[command(subcommand)]
    command: PatientSubcommand,
}

#[derive(Subcommand, Debug)]
enum PatientSubcommand {
    History,
    Profile,
    UpdateProfile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        dob: Option<String>,
        #[arg(long)]
        gender: Option<String>,
        #[arg(long)]
        blood_group: Option<String>,
        #[arg(long)]
        region: Option<String>,
    },
    AddRecord {
        #[arg(long)]
        diagnosis: String,
        #[arg(long)]
        medication: String,
        #[arg(long)]
        hospital: String,
        #[arg(long)]
        date: String,
    },
}

#[derive(Args, Debug)]
struct DoctorCommand {
    #[command(subcommand)]
    command: DoctorSubcommand,
}

#[derive(Subcommand, Debug)]
enum DoctorSubcommand {
    /// List the doctor directory (available to every role).
    List {
        #[arg(long)]
        specialization: Option<String>,
        #[arg(long)]
        region: Option<String>,
    },
    Slots {
        doctor_id: String,
    },
    Pending,
    Approve {
        record_id: String,
    },
    Reject {
        record_id: String,
        #[arg(long)]
        notes: Option<String>,
    },
    PatientHistory {
        patient_id: String,
    },
    Appointments,
    UpdateAppointment {
        appointment_id: String,
        #[arg(long)]
        status: AppointmentStatus,
    },
}

#[derive(Args, Debug)]
struct AppointmentCommand {
    #[command(subcommand)]
    command: AppointmentSubcommand,
}

#[derive(Subcommand, Debug)]
enum AppointmentSubcommand {
    Book {
        #[arg(long)]
        doctor_id: i64,
        #[arg(long)]
        date: String,
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        reason: Option<String>,
    },
    List,
    Cancel {
        appointment_id: String,
    },
}

#[derive(Args, Debug)]
struct AnalyticsCommand {
    #[command(subcommand)]
    command: AnalyticsSubcommand,
}

#[derive(Subcommand, Debug)]
enum AnalyticsSubcommand {
    RegionRisk,
    Trend {
        #[arg(long)]
        region: Option<String>,
        #[arg(long)]
        days: Option<u32>,
    },
    /// Admin risk overview.
    Overview,
    Environmental {
        #[arg(long)]
        region: Option<String>,
    },
    Diseases,
}

#[derive(Args, Debug)]
struct NotificationsCommand {
    #[command(subcommand)]
    command: NotificationsSubcommand,
}

#[derive(Subcommand, Debug)]
enum NotificationsSubcommand {
    List,
    MarkRead { notification_id: String },
    MarkAllRead,
    UnreadCount,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let token_file = cli
        .token_file
        .unwrap_or_else(client::config::default_token_file);
    let store = Arc::new(FileTokenStore::new(token_file));
    let api = ApiClient::new(cli.api_url, store);
    let ctx = CliContext { session: AuthSession::new(api.clone()), api };

    match cli.command {
        Command::Auth(auth) => run_auth(&ctx, auth).await,
        Command::Dashboard => run_dashboard(&ctx).await,
        Command::Patient(command) => run_patient(&ctx, command).await,
        Command::Doctor(command) => run_doctor(&ctx, command).await,
        Command::Appointment(command) => run_appointment(&ctx, command).await,
        Command::Analytics(command) => run_analytics(&ctx, command).await,
        Command::Notifications(command) => run_notifications(&ctx, command).await,
    }
}

/// Gate a command behind the protected-route guard. `allowed_roles = None`
/// admits any authenticated user.
fn authorize(ctx: &CliContext, allowed_roles: Option<&[Role]>, path: &str) -> Result<Role, CliError> {
    let state = ctx.session.resolve();
    match protected_route(&state, allowed_roles, path) {
        RouteDecision::Render => Ok(state.role()),
        RouteDecision::RedirectToDashboard => Err(CliError::RoleNotAllowed(state.role())),
        RouteDecision::Loading | RouteDecision::RedirectToLogin { .. } => {
            Err(CliError::LoginRequired)
        }
    }
}

async fn run_auth(ctx: &CliContext, auth: AuthCommand) -> Result<(), CliError> {
    match auth.command {
        AuthSubcommand::Login { email, password } => {
            if public_route(&ctx.session.resolve()) == RouteDecision::RedirectToDashboard {
                eprintln!("already logged in; run `healthiq auth logout` first");
                return Ok(());
            }
            let user = ctx.session.login(&LoginRequest { email, password }).await?;
            eprintln!("logged in as {} ({})", user.name, user.role);
            Ok(())
        }
        AuthSubcommand::Register {
            name,
            email,
            password,
            phone,
            dob,
            gender,
            blood_group,
            region,
            role,
        } => {
            if public_route(&ctx.session.resolve()) == RouteDecision::RedirectToDashboard {
                eprintln!("already logged in; run `healthiq auth logout` first");
                return Ok(());
            }
            let request = RegisterRequest {
                name,
                email,
                phone,
                dob,
                gender,
                blood_group,
                region,
                password,
                role,
            };
            let user = ctx.session.register(&request).await?;
            eprintln!("registered as {} ({})", user.name, user.role);
            Ok(())
        }
        AuthSubcommand::Logout => {
            ctx.session.logout();
            eprintln!("logged out");
            Ok(())
        }
        AuthSubcommand::Me => {
            authorize(ctx, None, "/me")?;
            let state = ctx.session.state();
            print_json(&state.user)
        }
    }
}

/// Role-dispatched dashboard: one closed match, no per-component branching.
async fn run_dashboard(ctx: &CliContext) -> Result<(), CliError> {
    let role = authorize(ctx, None, DASHBOARD_PATH)?;
    match role {
        Role::Patient => {
            let dashboard = patient::dashboard(&ctx.api).await?;
            print_json(&dashboard)
        }
        Role::Doctor => {
            let pending = doctor::pending_records(&ctx.api).await?;
            let upcoming = doctor::appointments(&ctx.api).await?;
            print_json(&serde_json::json!({
                "pending_records": pending,
                "appointments": upcoming,
            }))
        }
        Role::Admin => {
            let overview = analytics::admin_overview(&ctx.api).await?;
            print_json(&overview)
        }
    }
}

async fn run_patient(ctx: &CliContext, command: PatientCommand) -> Result<(), CliError> {
    match command.command {
        PatientSubcommand::History => {
            authorize(ctx, Some(&[Role::Patient]), "/medical-history")?;
            print_json(&patient::medical_history(&ctx.api).await?)
        }
        PatientSubcommand::Profile => {
            authorize(ctx, Some(&[Role::Patient]), "/profile")?;
            print_json(&patient::profile(&ctx.api).await?)
        }
        PatientSubcommand::UpdateProfile {
            name,
            phone,
            dob,
            gender,
            blood_group,
            region,
        } => {
            authorize(ctx, Some(&[Role::Patient]), "/profile")?;
            let update = ProfileUpdate { name, phone, dob, gender, blood_group, region };
            print_json(&patient::update_profile(&ctx.api, &update).await?)
        }
        PatientSubcommand::AddRecord {
            diagnosis,
            medication,
            hospital,
            date,
        } => {
            authorize(ctx, Some(&[Role::Patient]), "/medical-history")?;
            let record = CreateMedicalRecordRequest { diagnosis, medication, hospital, date };
            print_json(&patient::add_medical_record(&ctx.api, &record).await?)
        }
    }
}

async fn run_doctor(ctx: &CliContext, command: DoctorCommand) -> Result<(), CliError> {
    match command.command {
        DoctorSubcommand::List {
            specialization,
            region,
        } => {
            authorize(ctx, None, "/doctors")?;
            let filters = doctor::DoctorFilters { specialization, region };
            print_json(&doctor::list(&ctx.api, &filters).await?)
        }
        DoctorSubcommand::Slots { doctor_id } => {
            authorize(ctx, None, "/doctors")?;
            print_json(&doctor::available_slots(&ctx.api, &doctor_id).await?)
        }
        DoctorSubcommand::Pending => {
            authorize(ctx, Some(&[Role::Doctor]), "/doctor/pending")?;
            print_json(&doctor::pending_records(&ctx.api).await?)
        }
        DoctorSubcommand::Approve { record_id } => {
            authorize(ctx, Some(&[Role::Doctor]), "/doctor/pending")?;
            print_json(&doctor::approve_record(&ctx.api, &record_id).await?)
        }
        DoctorSubcommand::Reject { record_id, notes } => {
            authorize(ctx, Some(&[Role::Doctor]), "/doctor/pending")?;
            print_json(&doctor::reject_record(&ctx.api, &record_id, notes.as_deref()).await?)
        }
        DoctorSubcommand::PatientHistory { patient_id } => {
            authorize(ctx, Some(&[Role::Doctor]), "/doctor/patients")?;
            print_json(&doctor::patient_history(&ctx.api, &patient_id).await?)
        }
        DoctorSubcommand::Appointments => {
            authorize(ctx, Some(&[Role::Doctor]), "/doctor/appointments")?;
            print_json(&doctor::appointments(&ctx.api).await?)
        }
        DoctorSubcommand::UpdateAppointment {
            appointment_id,
            status,
        } => {
            authorize(ctx, Some(&[Role::Doctor]), "/doctor/appointments")?;
            let update = UpdateAppointmentRequest { appointment_id, status };
            print_json(&doctor::update_appointment(&ctx.api, &update).await?)
        }
    }
}

async fn run_appointment(ctx: &CliContext, command: AppointmentCommand) -> Result<(), CliError> {
    match command.command {
        AppointmentSubcommand::Book {
            doctor_id,
            date,
            time,
            reason,
        } => {
            authorize(ctx, Some(&[Role::Patient]), "/appointments")?;
            let booked = appointments::book(
                &ctx.api,
                doctor_id,
                &date,
                time.as_deref(),
                reason.as_deref(),
            )
            .await?;
            print_json(&booked)
        }
        AppointmentSubcommand::List => {
            authorize(ctx, Some(&[Role::Patient]), "/appointments")?;
            print_json(&appointments::list(&ctx.api).await?)
        }
        AppointmentSubcommand::Cancel { appointment_id } => {
            authorize(ctx, Some(&[Role::Patient]), "/appointments")?;
            print_json(&appointments::cancel(&ctx.api, &appointment_id).await?)
        }
    }
}

async fn run_analytics(ctx: &CliContext, command: AnalyticsCommand) -> Result<(), CliError> {
    match command.command {
        AnalyticsSubcommand::RegionRisk => {
            authorize(ctx, None, "/analytics")?;
            print_json(&analytics::region_risk(&ctx.api).await?)
        }
        AnalyticsSubcommand::Trend { region, days } => {
            authorize(ctx, None, "/analytics")?;
            print_json(&analytics::region_trend(&ctx.api, region.as_deref(), days).await?)
        }
        AnalyticsSubcommand::Overview => {
            authorize(ctx, Some(&[Role::Admin]), "/admin")?;
            print_json(&analytics::admin_overview(&ctx.api).await?)
        }
        AnalyticsSubcommand::Environmental { region } => {
            authorize(ctx, None, "/analytics")?;
            print_json(&analytics::environmental(&ctx.api, region.as_deref()).await?)
        }
        AnalyticsSubcommand::Diseases => {
            authorize(ctx, None, "/analytics")?;
            print_json(&analytics::disease_distribution(&ctx.api).await?)
        }
    }
}

async fn run_notifications(
    ctx: &CliContext,
    command: NotificationsCommand,
) -> Result<(), CliError> {
    match command.command {
        NotificationsSubcommand::List => {
            authorize(ctx, None, "/notifications")?;
            print_json(&notifications::list(&ctx.api).await?)
        }
        NotificationsSubcommand::MarkRead { notification_id } => {
            authorize(ctx, None, "/notifications")?;
            print_json(&notifications::mark_read(&ctx.api, &notification_id).await?)
        }
        NotificationsSubcommand::MarkAllRead => {
            authorize(ctx, None, "/notifications")?;
            notifications::mark_all_read(&ctx.api).await?;
            eprintln!("all notifications marked read");
            Ok(())
        }
        NotificationsSubcommand::UnreadCount => {
            authorize(ctx, None, "/notifications")?;
            let count = notifications::unread_count(&ctx.api).await?;
            println!("{count}");
            Ok(())
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
