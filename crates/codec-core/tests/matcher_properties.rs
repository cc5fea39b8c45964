//! Property tests for the codec match predicate

use codec_core::CodecDescriptor;
use proptest::prelude::*;

fn descriptor_strategy() -> impl Strategy<Value = CodecDescriptor> {
    (
        any::<u8>(),
        prop_oneof![
            Just(String::new()),
            "[A-Za-z0-9-]{1,16}".prop_map(String::from),
        ],
        prop_oneof![
            Just(8000u16),
            Just(11025u16),
            Just(16000u16),
            Just(48000u16),
            any::<u16>(),
        ],
        0u8..=2,
    )
        .prop_map(|(payload_type, name, sampling_rate, channel_count)| {
            CodecDescriptor::new(payload_type)
                .with_name(name)
                .with_sampling_rate(sampling_rate)
                .with_channel_count(channel_count)
        })
}

proptest! {
    #[test]
    fn matches_is_symmetric(a in descriptor_strategy(), b in descriptor_strategy()) {
        prop_assert_eq!(a.matches(&b), b.matches(&a));
    }

    #[test]
    fn matches_is_reflexive(a in descriptor_strategy()) {
        prop_assert!(a.matches(&a));
    }

    #[test]
    fn static_pairs_ignore_everything_but_payload_type(
        payload_type in 0u8..96,
        name_a in "[A-Za-z]{0,8}",
        name_b in "[A-Za-z]{0,8}",
        rate_a in any::<u16>(),
        rate_b in any::<u16>(),
    ) {
        let a = CodecDescriptor::new(payload_type)
            .with_name(name_a)
            .with_sampling_rate(rate_a)
            .with_channel_count(1);
        let b = CodecDescriptor::new(payload_type)
            .with_name(name_b)
            .with_sampling_rate(rate_b)
            .with_channel_count(2);
        prop_assert!(a.matches(&b));
    }

    #[test]
    fn dynamic_pairs_ignore_payload_type_numbers(
        pt_a in 96u8..=255,
        pt_b in 96u8..=255,
        name in "[A-Za-z-]{1,12}",
        rate in any::<u16>(),
        channels in 1u8..=2,
    ) {
        let a = CodecDescriptor::new(pt_a)
            .with_name(name.to_ascii_lowercase())
            .with_sampling_rate(rate)
            .with_channel_count(channels);
        let b = CodecDescriptor::new(pt_b)
            .with_name(name.to_ascii_uppercase())
            .with_sampling_rate(rate)
            .with_channel_count(channels);
        prop_assert!(a.matches(&b));
    }
}
