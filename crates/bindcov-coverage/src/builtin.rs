//! Builtin rule tables for Dear ImGui and its ReaScript binding.
//!
//! These are assembled into a [`RuleSet`](crate::RuleSet) by
//! [`RuleSet::builtin`](crate::RuleSet::builtin).

/// Functions that cannot be ported.
pub const NATIVE_ONLY: &[&str] = &[
    "bool ImGui::DebugCheckVersionAndDataLayout(const char*, size_t, size_t, size_t, size_t, size_t, size_t)",
    "ImGuiContext* ImGui::CreateContext(ImFontAtlas*)",
    "ImGuiContext* ImGui::GetCurrentContext()",
    "void ImGui::SetCurrentContext(ImGuiContext*)",
    "void ImGui::DestroyContext(ImGuiContext*)",
    "ImGuiIO& ImGui::GetIO()",
    "ImGuiStyle& ImGui::GetStyle()",
    "void ImGui::NewFrame()",
    "void ImGui::EndFrame()",
    "void ImGui::Render()",
    "ImDrawData* ImGui::GetDrawData()",
    "ImDrawListSharedData* ImGui::GetDrawListSharedData()",
    "ImGuiViewport* ImGui::GetMainViewport()",
    "void ImGui::CaptureKeyboardFromApp(bool)",
    "void ImGui::CaptureMouseFromApp(bool)",
    // fonts
    "ImFont* ImGui::GetFont()",
    "void ImGui::PushFont(ImFont*)",
    "void ImGui::PopFont()",
    "void ImDrawList::AddText(const ImFont*, float, const ImVec2&, ImU32, const char*, const char*, float, const ImVec4*)",
    // demo and style tools
    "void ImGui::ShowDemoWindow(bool*)",
    "void ImGui::ShowAboutWindow(bool*)",
    "void ImGui::ShowUserGuide()",
    "void ImGui::ShowStyleEditor(ImGuiStyle*)",
    "bool ImGui::ShowStyleSelector(const char*)",
    "void ImGui::ShowFontSelector(const char*)",
    "void ImGui::StyleColorsDark(ImGuiStyle*)",
    "void ImGui::StyleColorsLight(ImGuiStyle*)",
    "void ImGui::StyleColorsClassic(ImGuiStyle*)",
    // allocators
    "void ImGui::SetAllocatorFunctions(void* (*alloc_func)(size_t sz, void* user_data), void (*free_func)(void* ptr, void* user_data), void*)",
    "void* ImGui::MemAlloc(size_t)",
    "void ImGui::MemFree(void*)",
    "void ImGui::TextUnformatted(const char*, const char*)",
    "bool ImGui::CollapsingHeader(const char*, ImGuiTreeNodeFlags)",
    "bool ImGui::TreeNode(const char*)",
    "bool ImGui::TreeNode(const char*, const char*, ...)",
    "void ImDrawList::AddCallback(ImDrawCallback, void*)",
    "void ImDrawList::AddDrawCmd()",
    // storage and settings
    "void ImGui::SetStateStorage(ImGuiStorage*)",
    "ImGuiStorage* ImGui::GetStateStorage()",
    "void ImGui::LoadIniSettingsFromDisk(const char*)",
    "void ImGui::LoadIniSettingsFromMemory(const char*, size_t)",
    "void ImGui::SaveIniSettingsToDisk(const char*)",
    "const char* ImGui::SaveIniSettingsToMemory(size_t*)",
    "ImVec4 ImGui::ColorConvertU32ToFloat4(ImU32)",
    "ImU32 ImGui::ColorConvertFloat4ToU32(const ImVec4&)",
    // implemented as GetColorEx
    "ImU32 ImGui::GetColorU32(const ImVec4&)",
    // string IDs only
    "void ImGui::PushID(int)",
    "void ImGui::PushID(const void*)",
    "void ImGui::PushID(const char*, const char*)",
    "bool ImGui::BeginChild(ImGuiID, const ImVec2&, bool, ImGuiWindowFlags)",
    "ImGuiID ImGui::GetID(const char*)",
    "ImGuiID ImGui::GetID(const char*, const char*)",
    "ImGuiID ImGui::GetID(const void*)",
    "void ImGui::TreePush(const void*)",
    "bool ImGui::TreeNode(const void*, const char*, ...)",
    "bool ImGui::TreeNodeEx(const void*, ImGuiTreeNodeFlags, const char*, ...)",
    // item getter callbacks
    "bool ImGui::Combo(const char*, int*, bool(*items_getter)(void* data, int idx, const char** out_text), void*, int, int)",
    "bool ImGui::ListBox(const char*, int*, bool (*items_getter)(void* data, int idx, const char** out_text), void*, int, int)",
    "void ImGui::PlotLines(const char*, float(*values_getter)(void* data, int idx), void*, int, int, const char*, float, float, ImVec2)",
    "void ImGui::PlotHistogram(const char*, float(*values_getter)(void* data, int idx), void*, int, int, const char*, float, float, ImVec2)",
    // float overload of the ImVec2 variant
    "void ImGui::PushStyleVar(ImGuiStyleVar, float)",
    // array with explicit size
    "bool ImGui::Combo(const char*, int*, const char* const, int, int)",
    // va_list overloads
    "bool ImGui::TreeNodeV(const char*, const char*, va_list)",
    "bool ImGui::TreeNodeV(const void*, const char*, va_list)",
    "bool ImGui::TreeNodeExV(const char*, ImGuiTreeNodeFlags, const char*, va_list)",
    "bool ImGui::TreeNodeExV(const void*, ImGuiTreeNodeFlags, const char*, va_list)",
    "void ImGui::SetTooltipV(const char*, va_list)",
    "void ImGui::TextV(const char*, va_list)",
    "void ImGui::TextColoredV(const ImVec4&, const char*, va_list)",
    "void ImGui::TextDisabledV(const char*, va_list)",
    "void ImGui::TextWrappedV(const char*, va_list)",
    "void ImGui::LabelTextV(const char*, const char*, va_list)",
    "void ImGui::BulletTextV(const char*, va_list)",
    // SetNextWindow* instead
    "void ImGui::SetWindowPos(const ImVec2&, ImGuiCond)",
    "void ImGui::SetWindowSize(const ImVec2&, ImGuiCond)",
    "void ImGui::SetWindowCollapsed(bool, ImGuiCond)",
    "void ImGui::SetWindowFocus()",
    "void ImGui::SetWindowFontScale(float)",
    // list clipper instead
    "void ImGui::CalcListClipping(int, float, int*, int*)",
    // single-component scalar input
    "bool ImGui::DragScalar(const char*, ImGuiDataType, void*, float, const void*, const void*, const char*, ImGuiSliderFlags)",
    "bool ImGui::SliderScalar(const char*, ImGuiDataType, void*, const void*, const void*, const char*, ImGuiSliderFlags)",
    "bool ImGui::VSliderScalar(const char*, const ImVec2&, ImGuiDataType, void*, const void*, const void*, const char*, ImGuiSliderFlags)",
    "bool ImGui::InputScalar(const char*, ImGuiDataType, void*, const void*, const void*, const char*, ImGuiInputTextFlags)",
    // legacy columns
    "void ImGui::Columns(int, const char*, bool)",
    "void ImGui::NextColumn()",
    "int ImGui::GetColumnIndex()",
    "float ImGui::GetColumnWidth(int)",
    "void ImGui::SetColumnWidth(int, float)",
    "float ImGui::GetColumnOffset(int)",
    "void ImGui::SetColumnOffset(int, float)",
    "int ImGui::GetColumnsCount()",
    // primitives allocation
    "void ImDrawList::PrimReserve(int, int)",
    "void ImDrawList::PrimUnreserve(int, int)",
    "void ImDrawList::PrimRect(const ImVec2&, const ImVec2&, ImU32)",
    "void ImDrawList::PrimRectUV(const ImVec2&, const ImVec2&, const ImVec2&, const ImVec2&, ImU32)",
    "void ImDrawList::PrimQuadUV(const ImVec2&, const ImVec2&, const ImVec2&, const ImVec2&, const ImVec2&, const ImVec2&, const ImVec2&, const ImVec2&, ImU32)",
    // images
    "ImVec2 ImGui::GetFontTexUvWhitePixel()",
    "void ImGui::Image(ImTextureID, const ImVec2&, const ImVec2&, const ImVec2&, const ImVec4&, const ImVec4&)",
    "bool ImGui::ImageButton(ImTextureID, const ImVec2&, const ImVec2&, const ImVec2&, int, const ImVec4&, const ImVec4&)",
    "void ImDrawList::PushTextureID(ImTextureID)",
    "void ImDrawList::PopTextureID()",
    "void ImDrawList::AddImage(ImTextureID, const ImVec2&, const ImVec2&, const ImVec2&, const ImVec2&, ImU32)",
    "void ImDrawList::AddImageQuad(ImTextureID, const ImVec2&, const ImVec2&, const ImVec2&, const ImVec2&, const ImVec2&, const ImVec2&, const ImVec2&, const ImVec2&, ImU32)",
    "void ImDrawList::AddImageRounded(ImTextureID, const ImVec2&, const ImVec2&, const ImVec2&, const ImVec2&, ImU32, float, ImDrawCornerFlags)",
    // value helpers
    "void ImGui::Value(const char*, bool)",
    "void ImGui::Value(const char*, int)",
    "void ImGui::Value(const char*, unsigned int)",
    "void ImGui::Value(const char*, float, const char*)",
];

/// Classes whose methods are never bound.
pub const NATIVE_ONLY_CLASSES: &[&str] = &[
    "ImGuiIO",
    "ImFontAtlas",
    "ImFont",
    "ImDrawData",
    "ImDrawListSplitter",
    "ImGuiStoragePair",
    "ImGuiStyle",
    "ImGuiInputTextCallbackData",
    "ImFontGlyphRangesBuilder",
    "ImGuiTextBuffer",
    "ImGuiTextFilter",
];

/// Enum constants that are never exported, by exact name.
pub const NATIVE_ONLY_ENUMS: &[&str] = &[
    "Cond_None",
    "ColorEditFlags_HDR",
    "MouseCursor_None",
    "TreeNodeFlags_NavLeftJumpsBackHere",
    "ConfigFlags_NavEnableGamepad",
    "ConfigFlags_NavNoCaptureKeyboard",
    "ConfigFlags_IsSRGB",
    "ConfigFlags_IsTouchScreen",
    "InputTextFlags_Multiline",
    "InputTextFlags_NoMarkEdited",
    "WindowFlags_NavFlattened",
    "WindowFlags_ChildWindow",
    "WindowFlags_Tooltip",
    "WindowFlags_Popup",
    "WindowFlags_Modal",
    "WindowFlags_ChildMenu",
];

/// Enum constant prefixes that are never exported.
pub const NATIVE_ONLY_ENUM_PREFIXES: &[&str] = &[
    "InputTextFlags_Callback",
    "DataType_",
    "NavInput_",
    "BackendFlags_",
    "FontAtlasFlags_",
    "Key_",
    "ViewportFlags_",
    "TableFlags_NoBordersInBody",
    "DrawListFlags_",
];

/// Enum constant suffixes that are never exported.
pub const NATIVE_ONLY_ENUM_SUFFIXES: &[&str] = &["_NoSavedSettings"];

/// Enum constants never exported, by `(prefix, suffix)`.
pub const NATIVE_ONLY_ENUM_AFFIXES: &[(&str, &str)] = &[("ColorEditFlags__", "Mask")];

/// Overloads ported under another name.
pub const RENAMES: &[(&str, &str)] = &[
    ("bool ImGui::RadioButton(const char*, int*, int)", "RadioButtonEx"),
    ("ImU32 ImGui::GetColorU32(ImGuiCol, float)", "GetColor"),
    ("bool ImGui::TreeNodeEx(const char*, ImGuiTreeNodeFlags)", "TreeNode"),
    ("ImU32 ImGui::GetColorU32(ImU32)", "GetColorEx"),
    ("const ImVec4& ImGui::GetStyleColorVec4(ImGuiCol)", "GetStyleColor"),
    ("bool ImGui::IsRectVisible(const ImVec2&, const ImVec2&)", "IsRectVisibleEx"),
    ("ImGuiTableSortSpecs* ImGui::TableGetSortSpecs()", "TableGetColumnSortSpecs"),
    (
        "bool ImGui::DragScalarN(const char*, ImGuiDataType, void*, int, float, const void*, const void*, const char*, ImGuiSliderFlags)",
        "DragDoubleN",
    ),
    (
        "bool ImGui::SliderScalarN(const char*, ImGuiDataType, void*, int, const void*, const void*, const char*, ImGuiSliderFlags)",
        "SliderDoubleN",
    ),
    (
        "bool ImGui::InputScalarN(const char*, ImGuiDataType, void*, int, const void*, const void*, const char*, ImGuiInputTextFlags)",
        "InputDoubleN",
    ),
];

/// Per-function argument renames, `(function, [(native name, binding name)])`.
pub const ARG_RENAMES: &[(&str, &[(&str, &str)])] = &[
    ("IsKeyDown", &[("user_key_index", "key_code")]),
    ("IsKeyPressed", &[("user_key_index", "key_code")]),
    ("IsKeyReleased", &[("user_key_index", "key_code")]),
];

/// Functions not ported 1:1, `(native signature, binding signature)`.
pub const OVERRIDES: &[(&str, &str)] = &[
    ("const char* ImGui::GetVersion()", "void GetVersion(char*, int, char*, int)"),
    (
        "void ImGui::ColorConvertHSVtoRGB(float, float, float, float&, float&, float&)",
        "int ColorConvertHSVtoRGB(double, double, double, double*, double*, double*, double*)",
    ),
    (
        "void ImGui::ColorConvertRGBtoHSV(float, float, float, float&, float&, float&)",
        "int ColorConvertRGBtoHSV(double, double, double, double*, double*, double*, double*)",
    ),
    (
        "void ImGui::PushStyleVar(ImGuiStyleVar, const ImVec2&)",
        "void PushStyleVar(int, double, double*)",
    ),
    (
        "bool ImGui::SetDragDropPayload(const char*, const void*, size_t, ImGuiCond)",
        "bool SetDragDropPayload(const char*, const char*, int*)",
    ),
    (
        "const ImGuiPayload* ImGui::GetDragDropPayload()",
        "bool GetDragDropPayload(char*, int, char*, int, bool*, bool*)",
    ),
    (
        "bool ImGui::TreeNodeEx(const char*, ImGuiTreeNodeFlags, const char*, ...)",
        "bool TreeNodeEx(const char*, const char*, int*)",
    ),
    (
        "ImGuiTableSortSpecs* ImGui::TableGetSortSpecs()",
        "bool TableGetColumnSortSpecs(int, int*, int*, int*, int*)",
    ),
    // color array to packed int
    (
        "bool ImGui::ColorPicker4(const char*, float[4], ImGuiColorEditFlags, const float*)",
        "bool ColorPicker4(const char*, int*, int*, int*)",
    ),
    ("const ImVec4& ImGui::GetStyleColorVec4(ImGuiCol)", "int GetStyleColor(int)"),
    // (array, size) to reaper_array*
    (
        "void ImGui::PlotLines(const char*, const float*, int, int, const char*, float, float, ImVec2, int)",
        "void PlotLines(const char*, reaper_array*, int*, const char*, double*, double*, double*, double*)",
    ),
    (
        "void ImGui::PlotHistogram(const char*, const float*, int, int, const char*, float, float, ImVec2, int)",
        "void PlotHistogram(const char*, reaper_array*, int*, const char*, double*, double*, double*, double*)",
    ),
    (
        "void ImDrawList::AddPolyline(const ImVec2*, int, ImU32, bool, float)",
        "void DrawList_AddPolyline(reaper_array*, int, bool, double)",
    ),
    (
        "void ImDrawList::AddConvexPolyFilled(const ImVec2*, int, ImU32)",
        "void DrawList_AddConvexPolyFilled(reaper_array*, int, int)",
    ),
    // no callbacks
    (
        "bool ImGui::InputText(const char*, char*, size_t, ImGuiInputTextFlags, ImGuiInputTextCallback, void*)",
        "bool InputText(const char*, char*, int, int*)",
    ),
    (
        "bool ImGui::InputTextMultiline(const char*, char*, size_t, const ImVec2&, ImGuiInputTextFlags, ImGuiInputTextCallback, void*)",
        "bool InputTextMultiline(const char*, char*, int, double*, double*, int*)",
    ),
    (
        "bool ImGui::InputTextWithHint(const char*, const char*, char*, size_t, ImGuiInputTextFlags, ImGuiInputTextCallback, void*)",
        "bool InputTextWithHint(const char*, const char*, char*, int, int*)",
    ),
    (
        "void ImGui::SetNextWindowSizeConstraints(const ImVec2&, const ImVec2&, ImGuiSizeCallback, void*)",
        "void SetNextWindowSizeConstraints(double, double, double, double)",
    ),
    // null-terminated lists to \31-terminated strings
    (
        "bool ImGui::Combo(const char*, int*, const char*, int)",
        "bool Combo(const char*, int*, char*, int*)",
    ),
    (
        "bool ImGui::ListBox(const char*, int*, const char* const, int, int)",
        "bool ListBox(const char*, int*, char*, int*)",
    ),
    // no text_end argument
    (
        "ImVec2 ImGui::CalcTextSize(const char*, const char*, bool, float)",
        "void CalcTextSize(const char*, double*, double*, bool*, double*)",
    ),
    (
        "void ImDrawList::AddText(const ImVec2&, ImU32, const char*, const char*)",
        "void DrawList_AddText(double, double, int, const char*)",
    ),
    (
        "bool ImGui::DragScalarN(const char*, ImGuiDataType, void*, int, float, const void*, const void*, const char*, ImGuiSliderFlags)",
        "bool DragDoubleN(const char*, reaper_array*, double*, double*, double*, const char*, int*)",
    ),
    (
        "bool ImGui::SliderScalarN(const char*, ImGuiDataType, void*, int, const void*, const void*, const char*, ImGuiSliderFlags)",
        "bool SliderDoubleN(const char*, reaper_array*, double, double, const char*, int*)",
    ),
    (
        "bool ImGui::InputScalarN(const char*, ImGuiDataType, void*, int, const void*, const void*, const char*, ImGuiInputTextFlags)",
        "bool InputDoubleN(const char*, reaper_array*, double*, double*, const char*, int*)",
    ),
    // payload as string
    (
        "const ImGuiPayload* ImGui::AcceptDragDropPayload(const char*, ImGuiDragDropFlags)",
        "bool AcceptDragDropPayload(const char*, char*, int, int*)",
    ),
];

/// Resource handle types, which must come first and carry this name.
pub const RESOURCES: &[(&str, &str)] = &[
    ("ImGui_Context*", "ctx"),
    ("ImGui_DrawList*", "draw_list"),
    ("ImGui_ListClipper*", "clipper"),
];

/// Native handle types and their binding spelling.
pub const HANDLES: &[(&str, &str)] = &[
    ("ImGuiContext*", "ImGui_Context*"),
    ("ImDrawList*", "ImGui_DrawList*"),
    ("ImGuiListClipper*", "ImGui_ListClipper*"),
];

/// Types the host scripting API understands.
pub const TYPES: &[&str] = &[
    "bool",
    "bool*",
    "int",
    "int*",
    "double",
    "double*",
    "ImGui_Context*",
    "ImGui_DrawList*",
    "ImGui_ListClipper*",
    "char*",
    "const char*",
    "reaper_array*",
    "void*",
];

/// Rewritten `_None` defaults that mean something else in the binding.
pub const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("ImGui_Cond_None", "ImGui_Cond_Always"),
    ("ImGui_MouseButton_None", "ImGui_MouseButton_Left"),
];
