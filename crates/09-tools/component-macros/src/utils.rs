//! 宏工具函数

use syn::ext::IdentExt;
use syn::{Attribute, Field, Ident, LitStr, Result};

/// 字段标识符文本，去掉原始标识符前缀 `r#`
pub fn field_name(ident: &Ident) -> String {
    ident.unraw().to_string()
}

/// 检查属性是否为指定名称
pub fn is_attribute(attr: &Attribute, attr_name: &str) -> bool {
    attr.path().is_ident(attr_name)
}

/// 从字段的 `#[inject(...)]` 属性中提取查找键
///
/// 支持 `#[inject("Key")]` 和 `#[inject(key = "Key")]` 两种写法，
/// 同一字段只允许出现一次。
pub fn extract_inject_key(field: &Field) -> Result<Option<LitStr>> {
    let mut key: Option<LitStr> = None;

    for attr in field.attrs.iter().filter(|attr| is_attribute(attr, "inject")) {
        if key.is_some() {
            return Err(syn::Error::new_spanned(attr, "重复的 #[inject] 属性"));
        }

        let parsed = match attr.parse_args::<LitStr>() {
            Ok(lit) => lit,
            Err(_) => parse_named_key(attr)?,
        };

        if parsed.value().is_empty() {
            return Err(syn::Error::new_spanned(parsed, "查找键不能为空"));
        }
        key = Some(parsed);
    }

    Ok(key)
}

fn parse_named_key(attr: &Attribute) -> Result<LitStr> {
    let mut key = None;

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("key") {
            key = Some(meta.value()?.parse::<LitStr>()?);
            Ok(())
        } else {
            Err(meta.error("不支持的 inject 参数，期望 `key = \"...\"`"))
        }
    })?;

    key.ok_or_else(|| syn::Error::new_spanned(attr, "缺少查找键，期望 #[inject(\"Key\")]"))
}
