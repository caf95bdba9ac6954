//! Embedded registry
//!
//! The default registry ships inside the binary so `hookshelf add` works
//! offline. Files are keyed by their registry-relative path.

macro_rules! registry_file {
    ($path:literal) => {
        ($path, include_str!(concat!("../../registry/", $path)))
    };
}

/// All bundled files with their registry-relative paths
pub const FILES: &[(&str, &str)] = &[
    registry_file!("registry.json"),
    registry_file!("utils/isBrowser.ts"),
    registry_file!("utils/debounce.ts"),
    registry_file!("types/serializer.ts"),
    registry_file!("hooks/useToggle/useToggle.ts"),
    registry_file!("hooks/useBoolean/useBoolean.ts"),
    registry_file!("hooks/useIsomorphicLayoutEffect/useIsomorphicLayoutEffect.ts"),
    registry_file!("hooks/useIsMounted/useIsMounted.ts"),
    registry_file!("hooks/useEventCallback/useEventCallback.ts"),
    registry_file!("hooks/useEventListener/useEventListener.ts"),
    registry_file!("hooks/useLocalStorage/useLocalStorage.ts"),
    registry_file!("hooks/useUnmount/useUnmount.ts"),
    registry_file!("hooks/useDebounceCallback/useDebounceCallback.ts"),
    registry_file!("hooks/useOnClickOutside/useOnClickOutside.ts"),
    registry_file!("hooks/useMediaQuery/useMediaQuery.ts"),
];
