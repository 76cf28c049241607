#![no_main]

use dotnames::{
    members::{EventName, FieldName, MemberName, PropertyName},
    AssemblyName, AssemblyVersion, Blob, MethodName, ModuleName, NamespaceName, TypeName,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Some(name) = TypeName::try_parse(text) {
        let _ = name.to_string_with("U");
    }
    if let Some(name) = MethodName::try_parse(text) {
        let _ = name.to_string_with("U");
    }
    let _ = PropertyName::try_parse(text);
    let _ = FieldName::try_parse(text);
    let _ = EventName::try_parse(text);
    let _ = MemberName::try_parse(text);
    let _ = AssemblyName::try_parse(text);
    let _ = AssemblyVersion::try_parse(text);
    let _ = NamespaceName::try_parse(text);
    let _ = ModuleName::try_parse(text);
    let _ = Blob::try_parse(text);
});
