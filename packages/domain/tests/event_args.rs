use fluent_translation_domain::prelude::*;
use std::sync::Arc;

#[cfg(test)]
mod translation_synthesis_event_tests {
    use super::*;

    #[test]
    fn test_result_and_session_id_are_reflected() {
        let result_a = Arc::new(TranslationSynthesisResult::from_audio(vec![1, 2, 3, 4]));
        let args = TranslationSynthesisEventArgs::new(Arc::clone(&result_a), Some("sess-1"));

        assert!(Arc::ptr_eq(args.shared_result(), &result_a));
        assert_eq!(args.result(), result_a.as_ref());
        assert_eq!(args.session_id().id(), "sess-1");
    }

    #[test]
    fn test_session_id_generated_when_absent() {
        let result_b = Arc::new(TranslationSynthesisResult::completed());
        let args = TranslationSynthesisEventArgs::new(Arc::clone(&result_b), None::<&str>);

        assert!(Arc::ptr_eq(args.shared_result(), &result_b));
        assert!(!args.session_id().id().is_empty());
        assert_eq!(args.session_id().id().len(), 32);
    }

    #[test]
    fn test_owned_session_id_is_accepted() {
        let id = SessionId::generate();
        let args = TranslationSynthesisEventArgs::new(
            TranslationSynthesisResult::from_audio(vec![7]),
            Some(id.clone()),
        );
        assert_eq!(args.session_id(), &id);
    }

    #[test]
    fn test_generic_session_event_access() {
        fn session_of(event: &impl SessionEvent) -> &str {
            event.session_id().id()
        }

        let args = TranslationSynthesisEventArgs::new(
            TranslationSynthesisResult::completed(),
            Some(String::from("sess-42")),
        );
        assert_eq!(session_of(&args), "sess-42");
        assert_eq!(session_of(args.session()), "sess-42");
    }

    #[test]
    fn test_event_args_are_shareable_across_threads() {
        let args = Arc::new(TranslationSynthesisEventArgs::new(
            TranslationSynthesisResult::from_audio(vec![0xAA; 64]),
            Some("sess-threads"),
        ));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let args = Arc::clone(&args);
                std::thread::spawn(move || args.result().audio_len())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 64);
        }
    }
}

#[cfg(test)]
mod config_serde_tests {
    use super::*;

    #[test]
    fn test_config_deserializes_with_defaults() {
        let json = r#"{
            "source_language": "en-US",
            "target_languages": ["de-DE", "fr-FR"]
        }"#;
        let config: TranslationSynthesisConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.source_language, Language::ENGLISH_US);
        assert_eq!(
            config.target_languages,
            vec![Language::GERMAN, Language::FRENCH]
        );
        assert_eq!(config.voice_name, None);
        assert_eq!(config.output_format, AudioFormat::Riff16Khz16BitMonoPcm);
        assert!(config.validate().is_ok());
        assert!(!config.synthesis_enabled());
    }

    #[test]
    fn test_config_with_voice_and_format() {
        let json = r#"{
            "source_language": "en-US",
            "target_languages": ["ja-JP"],
            "voice_name": "ja-JP-NanamiNeural",
            "output_format": "Raw24Khz16BitMonoPcm"
        }"#;
        let config: TranslationSynthesisConfig = serde_json::from_str(json).unwrap();

        assert!(config.synthesis_enabled());
        assert_eq!(config.output_format.sample_rate(), 24_000);
        assert!(!config.output_format.has_header());
    }

    #[test]
    fn test_session_id_serializes_transparently() {
        let id = SessionId::new("abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""abc""#);
    }
}
