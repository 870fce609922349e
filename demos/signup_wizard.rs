//! Signup Wizard
//!
//! This example walks a three-step signup form with scripted input.
//!
//! Key concepts:
//! - Steps gate only on their own fields
//! - A rejected advance leaves the step in place and fills the error set
//! - Back navigation never validates
//! - Submit runs full validation on the last step
//!
//! Run with: RUST_LOG=formstep=debug cargo run --example signup_wizard

use formstep::builder::{DefaultEngine, MultiStepFormBuilder};
use formstep::core::FormValues;
use formstep::field_enum;
use formstep::form::SubmitOutcome;
use formstep::validation::{Rule, SchemaBuilder};
use formstep::MultiStepForm;
use tracing_subscriber::EnvFilter;

field_enum! {
    enum SignupField {
        Name => "name",
        Age => "age",
        Email => "contact.email",
        Password => "password",
        Confirm => "confirm",
    }
}

type Renderer = fn(&DefaultEngine<SignupField>) -> String;

fn render_profile(form: &DefaultEngine<SignupField>) -> String {
    format!(
        "Profile  name={} age={}",
        form.value(&SignupField::Name).cloned().unwrap_or_default(),
        form.value(&SignupField::Age).cloned().unwrap_or_default()
    )
}

fn render_contact(form: &DefaultEngine<SignupField>) -> String {
    format!(
        "Contact  email={}",
        form.value(&SignupField::Email).cloned().unwrap_or_default()
    )
}

fn render_security(_form: &DefaultEngine<SignupField>) -> String {
    "Security  password=******".to_string()
}

fn show(form: &MultiStepForm<SignupField, Renderer, DefaultEngine<SignupField>>) {
    let render = form.step().renderable();
    println!(
        "  [{}/{}] {}",
        form.current_step_index() + 1,
        form.step_count(),
        render(form.form())
    );
    for (path, messages) in form.errors().by_path() {
        println!("      ! {path}: {}", messages.join(", "));
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Signup Wizard Example ===\n");

    let schema = SchemaBuilder::new()
        .rules(SignupField::Name, [Rule::Required, Rule::MinLength(2)])
        .rule(SignupField::Age, Rule::Min(18.0))
        .rules(SignupField::Email, [Rule::Required, Rule::Email])
        .rule(SignupField::Password, Rule::MinLength(8))
        .require_match(SignupField::Confirm, SignupField::Password, "must match password")
        .build();

    let mut form = MultiStepFormBuilder::new()
        .step(render_profile as Renderer, vec![SignupField::Name, SignupField::Age])
        .step(render_contact as Renderer, vec![SignupField::Email])
        .step(
            render_security as Renderer,
            vec![SignupField::Password, SignupField::Confirm],
        )
        .schema(schema)
        .initial_values(
            FormValues::new()
                .with(SignupField::Name, "")
                .with(SignupField::Age, 0)
                .with(SignupField::Email, "")
                .with(SignupField::Password, "")
                .with(SignupField::Confirm, ""),
        )
        .build()
        .expect("signup form should build");

    println!("Step 1: advancing with empty profile");
    println!("  outcome: {:?}", form.next().await.expect("engine error"));
    show(&form);

    println!("\nStep 2: fixing the profile");
    form.form_mut().set_value(SignupField::Name, "Ada").expect("name is registered");
    form.form_mut().set_value(SignupField::Age, 36).expect("age is registered");
    println!("  outcome: {:?}", form.next().await.expect("engine error"));
    show(&form);

    println!("\nStep 3: going back never validates");
    form.back();
    show(&form);
    form.next().await.expect("engine error");

    println!("\nStep 4: contact and security");
    form.form_mut()
        .set_value(SignupField::Email, "ada@example.com")
        .expect("email is registered");
    form.next().await.expect("engine error");
    form.form_mut()
        .set_value(SignupField::Password, "analytical")
        .expect("password is registered");
    form.form_mut()
        .set_value(SignupField::Confirm, "analytica1")
        .expect("confirm is registered");
    show(&form);

    println!("\nStep 5: submitting");
    let outcome = form
        .handle_submit(|values| values.to_json())
        .await
        .expect("engine error");
    if let SubmitOutcome::Rejected = outcome {
        show(&form);
        form.form_mut()
            .set_value(SignupField::Confirm, "analytical")
            .expect("confirm is registered");
    }

    match form.handle_submit(|values| values.to_json()).await.expect("engine error") {
        SubmitOutcome::Submitted(payload) => println!("  submitted: {payload}"),
        SubmitOutcome::Rejected => println!("  still invalid"),
    }

    println!("\nVisited steps: {:?}", form.history().get_path());
    println!(
        "Snapshot: {}",
        serde_json::to_string_pretty(&form.snapshot()).expect("snapshot serializes")
    );
}
