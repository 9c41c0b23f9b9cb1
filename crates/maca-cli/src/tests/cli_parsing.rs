use crate::{Cli, Commands};

use std::path::PathBuf;

use clap::Parser;

#[test]
fn given_generate_args_when_parsed_then_mode_briefing_and_image_captured() {
    let cli = Cli::try_parse_from([
        "maca",
        "generate",
        "storys",
        "--briefing",
        "Promoção de pizza",
        "--image",
        "foto.jpg",
    ])
    .unwrap();

    let Commands::Generate {
        mode,
        briefing,
        image,
    } = cli.command
    else {
        panic!("expected generate");
    };
    assert_eq!(mode, "storys");
    assert_eq!(briefing, "Promoção de pizza");
    assert_eq!(image, Some(PathBuf::from("foto.jpg")));
}

#[test]
fn given_pretty_after_subcommand_when_parsed_then_flag_is_global() {
    let cli = Cli::try_parse_from(["maca", "status", "--pretty"]).unwrap();

    assert!(cli.pretty);
    assert!(matches!(cli.command, Commands::Status));
}

#[test]
fn given_generate_without_briefing_when_parsed_then_briefing_is_empty() {
    let cli = Cli::try_parse_from(["maca", "generate", "logo"]).unwrap();

    let Commands::Generate { briefing, image, .. } = cli.command else {
        panic!("expected generate");
    };
    assert!(briefing.is_empty());
    assert!(image.is_none());
}

#[test]
fn given_register_without_company_when_parsed_then_error() {
    let result = Cli::try_parse_from([
        "maca",
        "register",
        "--email",
        "ana@loja.com",
        "--password",
        "segredo",
    ]);

    assert!(result.is_err());
}

#[test]
fn given_register_without_description_when_parsed_then_description_defaults_empty() {
    let cli = Cli::try_parse_from([
        "maca",
        "register",
        "--email",
        "ana@loja.com",
        "--password",
        "segredo",
        "--company-name",
        "Pizzaria Bella",
        "--company-type",
        "Restaurante",
    ])
    .unwrap();

    let Commands::Register {
        company_name,
        description,
        ..
    } = cli.command
    else {
        panic!("expected register");
    };
    assert_eq!(company_name, "Pizzaria Bella");
    assert_eq!(description, "");
}

#[test]
fn given_verify_payment_with_text_when_parsed_then_image_absent() {
    let cli = Cli::try_parse_from(["maca", "verify-payment", "--text", "PIX recebido"]).unwrap();

    let Commands::VerifyPayment { text, image } = cli.command else {
        panic!("expected verify-payment");
    };
    assert_eq!(text, "PIX recebido");
    assert!(image.is_none());
}
