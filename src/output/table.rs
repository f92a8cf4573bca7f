use crate::models::{LookupKind, MailserverRecordSet, ResolutionError, Step};
use crate::output::colors::*;

/// Header printed before the first lookup runs
pub fn format_check_header(domain: &str) -> String {
    main_header(&format!("Mailserver Check: {}", domain))
}

/// Format a single completed lookup step
pub fn format_step(domain: &str, step: Step<'_>, style: KindStyle) -> String {
    let kind = step.kind();
    let mut output = section_header(kind.title());

    if let Some(error) = step.error() {
        output.push_str(&format!(
            "  {}\n",
            format_failure(&failure_message(kind, domain, error))
        ));
    } else if let Some(reason) = step.skip_reason() {
        output.push_str(&format!("  {}\n", format_skipped(reason)));
    } else {
        for line in step.lines() {
            output.push_str(&format!("  {}\n", format_record(&line, kind, style)));
        }
    }

    output.push('\n');
    output
}

/// Explanation of a failed lookup, naming the domain and the resolver's message
fn failure_message(kind: LookupKind, domain: &str, error: &ResolutionError) -> String {
    let cause = &error.message;
    match kind {
        LookupKind::Address => format!(
            "Can't find an IP address for domain {}. Lookup result: {}.",
            domain, cause
        ),
        LookupKind::Mx => format!(
            "Domain {} is missing MX records. Lookup result: {}.",
            domain, cause
        ),
        LookupKind::Reverse => format!(
            "Can't find a reverse lookup for the domain {}. Lookup result: {}.",
            domain, cause
        ),
        LookupKind::Spf => format!(
            "Can't find any text records for the domain {}. Lookup result: {}.",
            domain, cause
        ),
        LookupKind::Dkim => format!(
            "Can't find any DKIM records for the domain {}. Lookup result: {}.",
            domain, cause
        ),
    }
}

/// One line tally of failed lookups
pub fn format_summary(result: &MailserverRecordSet) -> String {
    let failures = result.failures().len();
    if failures == 0 {
        format!("{} All lookups returned records\n", format_check(true))
    } else if result.has_fatal_failure() {
        format!(
            "{} {} lookup(s) failed, no forward address for {}\n",
            format_check(false),
            failures,
            result.domain
        )
    } else {
        format!("{} {} lookup(s) failed\n", format_check(false), failures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::default_kind_color;
    use crate::services::stub::StubResolver;
    use crate::services::DomainValidator;
    use colored::{Color, Colorize};

    #[test]
    fn test_found_step_prints_one_line_per_record() {
        let stub = StubResolver::example_com();
        let report = DomainValidator::new(&stub).validate("example.com");
        let output = format_step("example.com", report.steps()[1], default_kind_color);

        assert!(output.contains("MX Records"));
        assert!(output.contains("mail.example.com (priority: 10)"));
        assert_eq!(output.lines().filter(|l| l.starts_with("  ")).count(), 1);
    }

    #[test]
    fn test_failed_steps_name_the_domain() {
        let stub = StubResolver::failing();
        let report = DomainValidator::new(&stub).validate("nodns.invalid");
        let output: String = report
            .steps()
            .iter()
            .map(|step| format_step("nodns.invalid", *step, default_kind_color))
            .collect();

        assert!(output.contains("Can't find an IP address for domain nodns.invalid"));
        assert!(output.contains("Domain nodns.invalid is missing MX records"));
        assert!(output.contains("Skipped: no forward address found for nodns.invalid"));
        assert!(output.contains("Can't find any text records for the domain nodns.invalid"));
        assert!(output.contains("Can't find any DKIM records for the domain nodns.invalid"));
        assert!(output.contains("stub: no such name"));
    }

    #[test]
    fn test_failure_message_names_domain_and_cause() {
        let err = ResolutionError::new(LookupKind::Reverse, "192.0.2.1", "timed out");
        assert_eq!(
            failure_message(LookupKind::Reverse, "example.com", &err),
            "Can't find a reverse lookup for the domain example.com. Lookup result: timed out."
        );
    }

    #[test]
    fn test_summary_counts_failures() {
        let stub = StubResolver::failing();
        let report = DomainValidator::new(&stub).validate("nodns.invalid");
        let summary = format_summary(&report);
        assert!(summary.contains("4 lookup(s) failed"));
        assert!(summary.contains("no forward address for nodns.invalid"));

        let stub = StubResolver::example_com();
        let report = DomainValidator::new(&stub).validate("example.com");
        assert!(format_summary(&report).contains("All lookups returned records"));
    }

    #[test]
    fn test_step_uses_injected_style() {
        fn all_green(_: LookupKind) -> Color {
            Color::Green
        }

        let stub = StubResolver::example_com();
        let report = DomainValidator::new(&stub).validate("example.com");
        let step = report.steps()[0];

        colored::control::set_override(true);
        let output = format_step("example.com", step, all_green);
        let expected = "93.184.216.34".color(Color::Green).to_string();
        let default_style = "93.184.216.34".red().to_string();
        colored::control::unset_override();

        assert!(output.contains(&expected));
        assert!(!output.contains(&default_style));
    }
}
