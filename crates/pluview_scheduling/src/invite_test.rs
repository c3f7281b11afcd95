#[cfg(test)]
mod tests {
    use crate::availability::AvailabilityFilter;
    use crate::draft::{BookingDraft, ContactField};
    use crate::error::ScheduleError;
    use crate::invite::{
        is_valid_email, sanitize_input, InviteFormatter, COMPANY_NOT_PROVIDED,
        GOOGLE_CALENDAR_URL,
    };
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use pluview_config::SchedulingConfig;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, 5)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    fn tomorrow() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 6).unwrap()
    }

    fn ana_draft() -> BookingDraft {
        let filter = AvailabilityFilter::default();
        let mut draft = BookingDraft::new();
        draft.set_contact_field(ContactField::Name, "Ana");
        draft.set_contact_field(ContactField::Email, "ana@ex.com");
        draft.set_contact_field(ContactField::Interest, "Parceria Comercial");
        draft.set_contact_field(ContactField::Message, "Olá");
        assert!(draft.select_date(tomorrow(), now(), &filter));
        assert!(draft.select_time("09:00".parse().unwrap(), now(), &filter));
        draft
    }

    #[test]
    fn test_sanitize_strips_angle_brackets() {
        assert_eq!(
            sanitize_input("<script>alert(1)</script>", 500),
            "scriptalert(1)/script"
        );
    }

    #[test]
    fn test_sanitize_removes_javascript_scheme_anywhere() {
        assert_eq!(sanitize_input("JavaScript:alert(1)", 500), "alert(1)");
        assert_eq!(sanitize_input("a javascript:b JAVASCRIPT:c", 500), "a b c");
        // removal must not splice a new scheme together
        assert_eq!(sanitize_input("javajavascript:script:x", 500), "x");
    }

    #[test]
    fn test_sanitize_removes_event_handlers() {
        assert_eq!(
            sanitize_input("<img src=x onerror=alert(1)>", 500),
            "img src=x alert(1)"
        );
        assert_eq!(sanitize_input("OnClick=go()", 500), "go()");
        // a plain word ending in "on" is untouched
        assert_eq!(sanitize_input("Ramon", 500), "Ramon");
    }

    #[test]
    fn test_sanitize_trims_and_truncates() {
        assert_eq!(sanitize_input("   Ana  \n", 500), "Ana");
        let long = "é".repeat(600);
        assert_eq!(sanitize_input(&long, 500).chars().count(), 500);
    }

    #[test]
    fn test_email_validity() {
        assert!(is_valid_email("ana@ex.com"));
        assert!(is_valid_email("a.b+tag@sub.example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("ana@excom"));
        assert!(!is_valid_email("ana maria@ex.com"));
        assert!(!is_valid_email("ana@@ex.com"));

        let local = "a".repeat(245);
        let at_limit = format!("{local}@ex.co.uk"); // 254 chars
        assert_eq!(at_limit.len(), 254);
        assert!(is_valid_email(&at_limit));
        assert!(!is_valid_email(&format!("a{at_limit}")));
    }

    #[test]
    fn test_calendar_request_round_trip() {
        let formatter = InviteFormatter::default();
        let request = formatter.to_calendar_event_request(&ana_draft()).unwrap();

        let start = tomorrow().and_hms_opt(9, 0, 0).unwrap();
        assert_eq!(request.start, start);
        assert_eq!(request.end, start + Duration::minutes(30));
        assert_eq!(
            request.attendees,
            vec!["fhservicesofc@gmail.com".to_string(), "ana@ex.com".to_string()]
        );
        assert_eq!(request.location, "Google Meet");
        assert_eq!(request.title, "PluView - Parceria Comercial com Ana");
        assert_eq!(request.dates(), "20250506T090000/20250506T093000");
        assert!(request.details.starts_with("Reunião agendada via PluView"));
        assert!(request.details.contains("Participante: Ana"));
        assert!(request
            .details
            .contains(&format!("Empresa: {COMPANY_NOT_PROVIDED}")));
    }

    #[test]
    fn test_calendar_url_parameters() {
        let formatter = InviteFormatter::default();
        let url = formatter
            .to_calendar_event_request(&ana_draft())
            .unwrap()
            .to_url()
            .unwrap();
        assert!(url.starts_with(&format!("{GOOGLE_CALENDAR_URL}?action=TEMPLATE&")));
        assert!(url.contains("dates=20250506T090000%2F20250506T093000"));
        assert!(url.contains("add=fhservicesofc%40gmail.com%2Cana%40ex.com"));
        assert!(url.contains("crm=AVAILABLE"));
        assert!(url.contains("trp=true"));
        assert!(url.contains("location=Google+Meet"));
    }

    #[test]
    fn test_email_request_fields() {
        let formatter = InviteFormatter::default();
        let mut draft = ana_draft();
        draft.set_contact_field(ContactField::Company, "  <b>PluView</b> ");
        draft.set_contact_field(ContactField::Email, "Ana@Ex.com");
        let request = formatter.to_email_compose_request(&draft).unwrap();

        assert_eq!(request.recipient, "fhservicesofc@gmail.com");
        assert_eq!(request.subject, "[PluView] Parceria Comercial - Ana");
        assert_eq!(
            request.body,
            "Nome: Ana\nEmail: ana@ex.com\nEmpresa: bPluView/b\nInteresse: Parceria Comercial\n\nMensagem:\nOlá"
        );

        let url = request.to_url().unwrap();
        assert!(url.starts_with("https://mail.google.com/mail/?view=cm&fs=1&to=fhservicesofc%40gmail.com&su="));
    }

    #[test]
    fn test_email_request_does_not_need_a_date() {
        let mut draft = ana_draft();
        draft.clear_date();
        assert!(InviteFormatter::default()
            .to_email_compose_request(&draft)
            .is_ok());
    }

    #[test]
    fn test_invalid_email_blocks_both_outputs() {
        let formatter = InviteFormatter::default();
        let mut draft = ana_draft();
        draft.set_contact_field(ContactField::Email, "not-an-email");
        assert!(draft.is_schedule_valid());

        assert_eq!(
            formatter.to_calendar_event_request(&draft),
            Err(ScheduleError::InvalidEmail("not-an-email".to_string()))
        );
        assert!(matches!(
            formatter.to_email_compose_request(&draft),
            Err(ScheduleError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_incomplete_drafts_are_refused() {
        let formatter = InviteFormatter::default();
        let mut draft = ana_draft();
        draft.clear_time();
        assert_eq!(
            formatter.to_calendar_event_request(&draft),
            Err(ScheduleError::NoTimeSelected)
        );
        draft.clear_date();
        assert_eq!(
            formatter.to_calendar_event_request(&draft),
            Err(ScheduleError::NoDateSelected)
        );
        draft.set_contact_field(ContactField::Interest, "");
        assert_eq!(
            formatter.to_email_compose_request(&draft),
            Err(ScheduleError::MissingField("interest"))
        );
    }

    #[test]
    fn test_markup_only_name_is_refused() {
        let mut draft = ana_draft();
        draft.set_contact_field(ContactField::Name, "<>");
        assert_eq!(
            InviteFormatter::default().to_email_compose_request(&draft),
            Err(ScheduleError::MissingField("name"))
        );
    }

    #[test]
    fn test_interest_must_come_from_the_configured_list() {
        let formatter = InviteFormatter::default();
        assert_eq!(formatter.interests().len(), 5);
        assert!(formatter.accepts_interest("Demonstração Técnica"));

        let mut draft = ana_draft();
        draft.set_contact_field(ContactField::Interest, "Spam em massa");
        assert_eq!(
            formatter.to_email_compose_request(&draft),
            Err(ScheduleError::UnknownInterest("Spam em massa".to_string()))
        );
        assert_eq!(
            formatter.to_calendar_event_request(&draft),
            Err(ScheduleError::UnknownInterest("Spam em massa".to_string()))
        );

        draft.set_contact_field(ContactField::Interest, "Outro");
        assert!(formatter.to_email_compose_request(&draft).is_ok());
    }

    #[test]
    fn test_configured_interests_replace_the_defaults() {
        let config = SchedulingConfig {
            interests: vec!["Imprensa".to_string()],
            ..SchedulingConfig::default()
        };
        let formatter = InviteFormatter::from_config(&config);
        let mut draft = ana_draft();
        assert!(matches!(
            formatter.to_email_compose_request(&draft),
            Err(ScheduleError::UnknownInterest(_))
        ));
        draft.set_contact_field(ContactField::Interest, "Imprensa");
        let request = formatter.to_email_compose_request(&draft).expect("request");
        assert_eq!(request.subject, "[PluView] Imprensa - Ana");

        // an empty list accepts any label
        let open = InviteFormatter::from_config(&SchedulingConfig {
            interests: Vec::new(),
            ..SchedulingConfig::default()
        });
        draft.set_contact_field(ContactField::Interest, "Qualquer coisa");
        assert!(open.to_email_compose_request(&draft).is_ok());
    }
}
