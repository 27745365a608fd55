pub const PAGE: &str = "relative min-h-screen w-full text-white overflow-hidden bg-gradient-to-br from-[#080317] via-[#1d0b33] to-[#001a44]";
pub const GLOW_OVERLAY: &str = "pointer-events-none absolute inset-0 [background:radial-gradient(circle_at_20%_30%,rgba(255,0,128,0.35),transparent_60%),radial-gradient(circle_at_80%_70%,rgba(0,128,255,0.35),transparent_65%)]";
pub const HEADER: &str = "relative z-10 w-full flex items-center justify-between px-6 py-4 backdrop-blur-sm bg-white/5 border-b border-white/10 shadow-lg";
pub const HEADER_TITLE: &str = "text-lg font-semibold tracking-wide drop-shadow-[0_0_6px_rgba(255,255,255,0.35)]";
pub const USER_BADGE: &str = "text-sm font-medium px-4 py-1.5 rounded-full bg-gradient-to-r from-pink-600/30 to-blue-600/30 border border-white/10 shadow-inner backdrop-blur-sm";
pub const CARD: &str = "bg-white/5 backdrop-blur-sm rounded-2xl border border-white/10 shadow-xl p-5 flex flex-col gap-4";
pub const BUTTON_PRIMARY: &str = "rounded-full px-10 py-4 text-sm font-semibold tracking-wide border border-white/20 transition bg-gradient-to-r from-pink-600 via-fuchsia-600 to-blue-600 hover:brightness-110";
pub const BUTTON_DISABLED: &str = "rounded-full px-10 py-4 text-sm font-semibold tracking-wide border border-white/10 transition bg-gradient-to-r from-pink-600 via-fuchsia-600 to-blue-600 opacity-40 cursor-not-allowed";
pub const BUTTON_SMALL: &str = "text-xs tracking-wide px-3 py-1 rounded-md bg-white/10 hover:bg-white/20 transition border border-white/10";
pub const MENU_BUTTON: &str = "w-full rounded-full px-8 py-4 text-sm font-bold tracking-widest uppercase border border-white/15 bg-gradient-to-r from-pink-600/80 via-fuchsia-600/80 to-blue-600/80 hover:brightness-110 active:scale-[0.98] transition shadow-lg";
pub const TEXT_HINT: &str = "text-[11px] text-white/50 text-center";
