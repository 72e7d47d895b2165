//! Document Assembler
//!
//! カテゴリのメタデータとパッケージを固定の画面骨格に埋め込み、
//! 出力ドキュメントを組み立てるモジュール。
//!
//! 骨格の定型テキストはどちらの形式でも翻訳キー参照で出力されます。
//! 形式によって異なるのはキーの名前空間と、ローカルなテキストの表現だけです。

use crate::api::DocumentFormat;
use crate::model::{
    Banner, BannerButton, CashbackSection, Components, DateTimeBox, InfoBadge, LocationBox,
    LocationText, LocationTexts, OutputDocument, SummaryLocationBox,
};
use crate::partition::CategoryGroup;
use crate::text::Text;

const BANNER_BUTTON_URL: &str = "https://www.fastwork.co/join";
const SERVICE_COVER_IMAGE: &str = "https://example.com/service-cover.jpg";

const AT_PIN_PLACEHOLDER_TH: &str = "คุณต้องการให้ช่างไปที่ไหน ?";
const AT_PIN_PLACEHOLDER_EN: &str = "Address where the service is needed";
const AT_STORE_PLACEHOLDER_TH: &str = "เราจะช่วยหาร้านที่ว่าง ใกล้หมุดที่คุณปัก";
const AT_STORE_PLACEHOLDER_EN: &str = "We'll help find available shops near your location";
const DATE_TIME_PLACEHOLDER_TH: &str = "เลือกวันที่และเวลารับบริการ";
const DATE_TIME_PLACEHOLDER_EN: &str = "Select date and time for service";

/// 骨格の翻訳キー（形式ごと）
struct SkeletonKeys {
    banner_title: &'static str,
    banner_button: &'static str,
    banner_subtitle: &'static str,
    refund_full: &'static str,
    refund_highlight: &'static str,
    payment_full: &'static str,
    payment_highlight: &'static str,
    cashback_full: &'static str,
    cashback_highlight: &'static str,
    summary_full: &'static str,
    summary_highlight: &'static str,
}

const INLINE_KEYS: SkeletonKeys = SkeletonKeys {
    banner_title: "service_definition.components.banner.title",
    banner_button: "service_definition.components.banner.button_text",
    banner_subtitle: "service_definition.components.banner.subtitle",
    refund_full: "service_definition.components.info_badge.refund.full_text",
    refund_highlight: "service_definition.components.info_badge.refund.highlight_text",
    payment_full: "service_definition.components.info_badge.payment.full_text",
    payment_highlight: "service_definition.components.info_badge.payment.highlight_text",
    cashback_full: "service_definition.components.cashback_section.full_text",
    cashback_highlight: "service_definition.components.cashback_section.highlight_text",
    summary_full: "service_definition.summary_info_badge.full_text",
    summary_highlight: "service_definition.summary_info_badge.highlight_text",
};

// 簡略形式ではfull_textとhighlight_textが同じキーを共有する
const SIMPLIFIED_KEYS: SkeletonKeys = SkeletonKeys {
    banner_title: "service.banner.title",
    banner_button: "service.banner.button_text",
    banner_subtitle: "service.banner.subtitle",
    refund_full: "service.info_badge.refund",
    refund_highlight: "service.info_badge.refund",
    payment_full: "service.info_badge.cashback",
    payment_highlight: "service.info_badge.cashback",
    cashback_full: "summary.info_badge.cashback",
    cashback_highlight: "summary.info_badge.cashback",
    summary_full: "summary.info_badge.payment",
    summary_highlight: "summary.info_badge.payment",
};

impl SkeletonKeys {
    fn for_format(format: DocumentFormat) -> &'static SkeletonKeys {
        match format {
            DocumentFormat::Inline => &INLINE_KEYS,
            DocumentFormat::Simplified => &SIMPLIFIED_KEYS,
        }
    }
}

/// 簡略形式で使う、カテゴリごとの場所プレースホルダーのキー
pub fn placeholder_key(slug: &str) -> &'static str {
    match slug {
        "cleaning" => "service.placeholder.cleaning",
        "air-cleaning" => "service.placeholder.air-cleaning",
        "part-time-ecommerce" | "part-time-online" | "part-time-general" | "part-time-event"
        | "part-time-hospitality" | "part-time-stock" | "part-time-driver" => {
            "service.placeholder.part-time"
        }
        "photography" => "service.placeholder.photography",
        "queue-booking" => "service.placeholder.queue-booking",
        "hair-salon" => "service.placeholder.hair-salon",
        // massage, technician-*, horoscope, nail-salon など
        _ => "service.placeholder.technician",
    }
}

/// カテゴリを出力ドキュメントに組み立てる
///
/// 同じ入力からは常に同じドキュメントが得られます。
pub fn assemble_document(group: CategoryGroup, format: DocumentFormat) -> OutputDocument {
    let title = match format {
        DocumentFormat::Inline => Text::inline(group.thai_name.as_str(), group.name.as_str()),
        DocumentFormat::Simplified => Text::plain(group.thai_name.as_str()),
    };
    let components = build_components(&group.slug, &group.location_types, format);
    let packages = group
        .packages
        .into_iter()
        .map(|draft| draft.into_package(format))
        .collect();

    OutputDocument {
        id: group.slug,
        title,
        packages,
        cart_limit: group.cart_limit,
        components,
        cover_image: SERVICE_COVER_IMAGE.to_string(),
        service_location_types: group.location_types,
    }
}

fn build_components(slug: &str, location_types: &[String], format: DocumentFormat) -> Components {
    let keys = SkeletonKeys::for_format(format);
    let location_box = build_location_box(slug, location_types, format);

    let date_time_placeholder = match format {
        DocumentFormat::Inline => Text::inline(DATE_TIME_PLACEHOLDER_TH, DATE_TIME_PLACEHOLDER_EN),
        DocumentFormat::Simplified => Text::plain(DATE_TIME_PLACEHOLDER_TH),
    };

    Components {
        banner: Banner {
            title: Text::i18n(keys.banner_title),
            button: BannerButton {
                url: BANNER_BUTTON_URL.to_string(),
                text: Text::i18n(keys.banner_button),
            },
            subtitle: Text::i18n(keys.banner_subtitle),
        },
        info_badge: vec![
            info_badge("refund_icon", keys.refund_full, keys.refund_highlight),
            info_badge("payment_icon", keys.payment_full, keys.payment_highlight),
        ],
        location_box: location_box.clone(),
        cashback_section: CashbackSection {
            icon: "point_icon".to_string(),
            full_text: Text::i18n(keys.cashback_full),
            highlight_text: Text::i18n(keys.cashback_highlight),
        },
        summary_info_badge: vec![info_badge(
            "check_icon",
            keys.summary_full,
            keys.summary_highlight,
        )],
        summary_location_box: SummaryLocationBox {
            location: location_box,
            date_time: DateTimeBox {
                visible: true,
                placeholder: date_time_placeholder,
            },
        },
    }
}

fn info_badge(icon: &str, full_text: &str, highlight_text: &str) -> InfoBadge {
    InfoBadge {
        icon: icon.to_string(),
        full_text: Text::i18n(full_text),
        more_content: None,
        highlight_text: Text::i18n(highlight_text),
    }
}

fn build_location_box(slug: &str, location_types: &[String], format: DocumentFormat) -> LocationBox {
    let (at_pin, at_store) = match format {
        DocumentFormat::Inline => (
            Text::inline(AT_PIN_PLACEHOLDER_TH, AT_PIN_PLACEHOLDER_EN),
            Text::inline(AT_STORE_PLACEHOLDER_TH, AT_STORE_PLACEHOLDER_EN),
        ),
        DocumentFormat::Simplified => {
            let key = placeholder_key(slug);
            (Text::i18n(key), Text::i18n(key))
        }
    };

    LocationBox {
        text: LocationTexts {
            at_pin: LocationText {
                description: None,
                placeholder: Some(at_pin),
            },
            online: LocationText {
                description: None,
                placeholder: None,
            },
            at_store: LocationText {
                description: None,
                placeholder: Some(at_store),
            },
        },
        visible: true,
        service_location_types: location_types.to_vec(),
        // 呼び出し側は空でないリストを渡す
        default_service_location_type: location_types.first().cloned().unwrap_or_default(),
    }
}
