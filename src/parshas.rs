use crate::constants::{Kviah, Parsha as P, Weekday};
use crate::error::CalendarError;

// One schedule per year type. The yearly reading sequence is fixed once the
// Rosh Hashana weekday, the kviah and the leap status of the year are known;
// a `None` entry is a Shabbos whose reading is displaced by a Yom Tov.

/// Rosh Hashana on Shabbos, Chaseirim, non-leap.
static SAT_SHORT: [Option<P>; 51] = [
    None, Some(P::HaAzinu), None, None, Some(P::Bereshis), Some(P::Noach), Some(P::LechLecha),
    Some(P::Vayera), Some(P::ChayeiSara), Some(P::Toldos), Some(P::Vayetzei),
    Some(P::Vayishlach), Some(P::Vayeshev), Some(P::Miketz), Some(P::Vayigash),
    Some(P::Vayechi), Some(P::Shemos), Some(P::Vaera), Some(P::Bo), Some(P::Beshalach),
    Some(P::Yisro), Some(P::Mishpatim), Some(P::Terumah), Some(P::Tetzaveh), Some(P::KiSisa),
    Some(P::VayakhelPekudei), Some(P::Vayikra), Some(P::Tzav), None, Some(P::Shmini),
    Some(P::TazriaMetzora), Some(P::AchreiMosKedoshim), Some(P::Emor), Some(P::BeharBechukosai),
    Some(P::Bamidbar), Some(P::Nasso), Some(P::Behaaloscha), Some(P::Shlach), Some(P::Korach),
    Some(P::Chukas), Some(P::Balak), Some(P::Pinchas), Some(P::MatosMasei), Some(P::Devarim),
    Some(P::Vaeschanan), Some(P::Eikev), Some(P::Reeh), Some(P::Shoftim), Some(P::KiSeitzei),
    Some(P::KiSavo), Some(P::Nitzavim),
];

/// Rosh Hashana on Shabbos, Shleimim, non-leap.
static SAT_LONG: [Option<P>; 51] = [
    None, Some(P::HaAzinu), None, None, Some(P::Bereshis), Some(P::Noach), Some(P::LechLecha),
    Some(P::Vayera), Some(P::ChayeiSara), Some(P::Toldos), Some(P::Vayetzei),
    Some(P::Vayishlach), Some(P::Vayeshev), Some(P::Miketz), Some(P::Vayigash),
    Some(P::Vayechi), Some(P::Shemos), Some(P::Vaera), Some(P::Bo), Some(P::Beshalach),
    Some(P::Yisro), Some(P::Mishpatim), Some(P::Terumah), Some(P::Tetzaveh), Some(P::KiSisa),
    Some(P::VayakhelPekudei), Some(P::Vayikra), Some(P::Tzav), None, Some(P::Shmini),
    Some(P::TazriaMetzora), Some(P::AchreiMosKedoshim), Some(P::Emor), Some(P::BeharBechukosai),
    Some(P::Bamidbar), Some(P::Nasso), Some(P::Behaaloscha), Some(P::Shlach), Some(P::Korach),
    Some(P::Chukas), Some(P::Balak), Some(P::Pinchas), Some(P::MatosMasei), Some(P::Devarim),
    Some(P::Vaeschanan), Some(P::Eikev), Some(P::Reeh), Some(P::Shoftim), Some(P::KiSeitzei),
    Some(P::KiSavo), Some(P::NitzavimVayeilech),
];

/// Rosh Hashana on Monday, Chaseirim, non-leap.
static MON_SHORT: [Option<P>; 50] = [
    Some(P::Vayeilech), Some(P::HaAzinu), None, Some(P::Bereshis), Some(P::Noach),
    Some(P::LechLecha), Some(P::Vayera), Some(P::ChayeiSara), Some(P::Toldos),
    Some(P::Vayetzei), Some(P::Vayishlach), Some(P::Vayeshev), Some(P::Miketz),
    Some(P::Vayigash), Some(P::Vayechi), Some(P::Shemos), Some(P::Vaera), Some(P::Bo),
    Some(P::Beshalach), Some(P::Yisro), Some(P::Mishpatim), Some(P::Terumah), Some(P::Tetzaveh),
    Some(P::KiSisa), Some(P::VayakhelPekudei), Some(P::Vayikra), Some(P::Tzav), None,
    Some(P::Shmini), Some(P::TazriaMetzora), Some(P::AchreiMosKedoshim), Some(P::Emor),
    Some(P::BeharBechukosai), Some(P::Bamidbar), Some(P::Nasso), Some(P::Behaaloscha),
    Some(P::Shlach), Some(P::Korach), Some(P::Chukas), Some(P::Balak), Some(P::Pinchas),
    Some(P::MatosMasei), Some(P::Devarim), Some(P::Vaeschanan), Some(P::Eikev), Some(P::Reeh),
    Some(P::Shoftim), Some(P::KiSeitzei), Some(P::KiSavo), Some(P::NitzavimVayeilech),
];

/// Rosh Hashana on Monday Shleimim or Tuesday Kesidran, non-leap.
static MON_LONG: [Option<P>; 50] = [
    Some(P::Vayeilech), Some(P::HaAzinu), None, Some(P::Bereshis), Some(P::Noach),
    Some(P::LechLecha), Some(P::Vayera), Some(P::ChayeiSara), Some(P::Toldos),
    Some(P::Vayetzei), Some(P::Vayishlach), Some(P::Vayeshev), Some(P::Miketz),
    Some(P::Vayigash), Some(P::Vayechi), Some(P::Shemos), Some(P::Vaera), Some(P::Bo),
    Some(P::Beshalach), Some(P::Yisro), Some(P::Mishpatim), Some(P::Terumah), Some(P::Tetzaveh),
    Some(P::KiSisa), Some(P::VayakhelPekudei), Some(P::Vayikra), Some(P::Tzav), None,
    Some(P::Shmini), Some(P::TazriaMetzora), Some(P::AchreiMosKedoshim), Some(P::Emor),
    Some(P::BeharBechukosai), Some(P::Bamidbar), None, Some(P::Nasso), Some(P::Behaaloscha),
    Some(P::Shlach), Some(P::Korach), Some(P::ChukasBalak), Some(P::Pinchas),
    Some(P::MatosMasei), Some(P::Devarim), Some(P::Vaeschanan), Some(P::Eikev), Some(P::Reeh),
    Some(P::Shoftim), Some(P::KiSeitzei), Some(P::KiSavo), Some(P::NitzavimVayeilech),
];

/// Rosh Hashana on Thursday, Kesidran, non-leap.
static THU_NORMAL: [Option<P>; 51] = [
    Some(P::HaAzinu), None, None, Some(P::Bereshis), Some(P::Noach), Some(P::LechLecha),
    Some(P::Vayera), Some(P::ChayeiSara), Some(P::Toldos), Some(P::Vayetzei),
    Some(P::Vayishlach), Some(P::Vayeshev), Some(P::Miketz), Some(P::Vayigash),
    Some(P::Vayechi), Some(P::Shemos), Some(P::Vaera), Some(P::Bo), Some(P::Beshalach),
    Some(P::Yisro), Some(P::Mishpatim), Some(P::Terumah), Some(P::Tetzaveh), Some(P::KiSisa),
    Some(P::VayakhelPekudei), Some(P::Vayikra), Some(P::Tzav), None, None, Some(P::Shmini),
    Some(P::TazriaMetzora), Some(P::AchreiMosKedoshim), Some(P::Emor), Some(P::BeharBechukosai),
    Some(P::Bamidbar), Some(P::Nasso), Some(P::Behaaloscha), Some(P::Shlach), Some(P::Korach),
    Some(P::Chukas), Some(P::Balak), Some(P::Pinchas), Some(P::MatosMasei), Some(P::Devarim),
    Some(P::Vaeschanan), Some(P::Eikev), Some(P::Reeh), Some(P::Shoftim), Some(P::KiSeitzei),
    Some(P::KiSavo), Some(P::Nitzavim),
];

/// Rosh Hashana on Thursday, Kesidran, non-leap (Israel).
static THU_NORMAL_ISRAEL: [Option<P>; 51] = [
    Some(P::HaAzinu), None, None, Some(P::Bereshis), Some(P::Noach), Some(P::LechLecha),
    Some(P::Vayera), Some(P::ChayeiSara), Some(P::Toldos), Some(P::Vayetzei),
    Some(P::Vayishlach), Some(P::Vayeshev), Some(P::Miketz), Some(P::Vayigash),
    Some(P::Vayechi), Some(P::Shemos), Some(P::Vaera), Some(P::Bo), Some(P::Beshalach),
    Some(P::Yisro), Some(P::Mishpatim), Some(P::Terumah), Some(P::Tetzaveh), Some(P::KiSisa),
    Some(P::VayakhelPekudei), Some(P::Vayikra), Some(P::Tzav), None, Some(P::Shmini),
    Some(P::TazriaMetzora), Some(P::AchreiMosKedoshim), Some(P::Emor), Some(P::Behar),
    Some(P::Bechukosai), Some(P::Bamidbar), Some(P::Nasso), Some(P::Behaaloscha),
    Some(P::Shlach), Some(P::Korach), Some(P::Chukas), Some(P::Balak), Some(P::Pinchas),
    Some(P::MatosMasei), Some(P::Devarim), Some(P::Vaeschanan), Some(P::Eikev), Some(P::Reeh),
    Some(P::Shoftim), Some(P::KiSeitzei), Some(P::KiSavo), Some(P::Nitzavim),
];

/// Rosh Hashana on Thursday, Shleimim, non-leap.
static THU_LONG: [Option<P>; 51] = [
    Some(P::HaAzinu), None, None, Some(P::Bereshis), Some(P::Noach), Some(P::LechLecha),
    Some(P::Vayera), Some(P::ChayeiSara), Some(P::Toldos), Some(P::Vayetzei),
    Some(P::Vayishlach), Some(P::Vayeshev), Some(P::Miketz), Some(P::Vayigash),
    Some(P::Vayechi), Some(P::Shemos), Some(P::Vaera), Some(P::Bo), Some(P::Beshalach),
    Some(P::Yisro), Some(P::Mishpatim), Some(P::Terumah), Some(P::Tetzaveh), Some(P::KiSisa),
    Some(P::Vayakhel), Some(P::Pekudei), Some(P::Vayikra), Some(P::Tzav), None, Some(P::Shmini),
    Some(P::TazriaMetzora), Some(P::AchreiMosKedoshim), Some(P::Emor), Some(P::BeharBechukosai),
    Some(P::Bamidbar), Some(P::Nasso), Some(P::Behaaloscha), Some(P::Shlach), Some(P::Korach),
    Some(P::Chukas), Some(P::Balak), Some(P::Pinchas), Some(P::MatosMasei), Some(P::Devarim),
    Some(P::Vaeschanan), Some(P::Eikev), Some(P::Reeh), Some(P::Shoftim), Some(P::KiSeitzei),
    Some(P::KiSavo), Some(P::Nitzavim),
];

/// Rosh Hashana on Shabbos, Chaseirim, leap.
static SAT_SHORT_LEAP: [Option<P>; 55] = [
    None, Some(P::HaAzinu), None, None, Some(P::Bereshis), Some(P::Noach), Some(P::LechLecha),
    Some(P::Vayera), Some(P::ChayeiSara), Some(P::Toldos), Some(P::Vayetzei),
    Some(P::Vayishlach), Some(P::Vayeshev), Some(P::Miketz), Some(P::Vayigash),
    Some(P::Vayechi), Some(P::Shemos), Some(P::Vaera), Some(P::Bo), Some(P::Beshalach),
    Some(P::Yisro), Some(P::Mishpatim), Some(P::Terumah), Some(P::Tetzaveh), Some(P::KiSisa),
    Some(P::Vayakhel), Some(P::Pekudei), Some(P::Vayikra), Some(P::Tzav), Some(P::Shmini),
    Some(P::Tazria), Some(P::Metzora), None, Some(P::AchreiMos), Some(P::Kedoshim),
    Some(P::Emor), Some(P::Behar), Some(P::Bechukosai), Some(P::Bamidbar), Some(P::Nasso),
    Some(P::Behaaloscha), Some(P::Shlach), Some(P::Korach), Some(P::Chukas), Some(P::Balak),
    Some(P::Pinchas), Some(P::MatosMasei), Some(P::Devarim), Some(P::Vaeschanan),
    Some(P::Eikev), Some(P::Reeh), Some(P::Shoftim), Some(P::KiSeitzei), Some(P::KiSavo),
    Some(P::NitzavimVayeilech),
];

/// Rosh Hashana on Shabbos, Shleimim, leap.
static SAT_LONG_LEAP: [Option<P>; 55] = [
    None, Some(P::HaAzinu), None, None, Some(P::Bereshis), Some(P::Noach), Some(P::LechLecha),
    Some(P::Vayera), Some(P::ChayeiSara), Some(P::Toldos), Some(P::Vayetzei),
    Some(P::Vayishlach), Some(P::Vayeshev), Some(P::Miketz), Some(P::Vayigash),
    Some(P::Vayechi), Some(P::Shemos), Some(P::Vaera), Some(P::Bo), Some(P::Beshalach),
    Some(P::Yisro), Some(P::Mishpatim), Some(P::Terumah), Some(P::Tetzaveh), Some(P::KiSisa),
    Some(P::Vayakhel), Some(P::Pekudei), Some(P::Vayikra), Some(P::Tzav), Some(P::Shmini),
    Some(P::Tazria), Some(P::Metzora), None, Some(P::AchreiMos), Some(P::Kedoshim),
    Some(P::Emor), Some(P::Behar), Some(P::Bechukosai), Some(P::Bamidbar), None, Some(P::Nasso),
    Some(P::Behaaloscha), Some(P::Shlach), Some(P::Korach), Some(P::ChukasBalak),
    Some(P::Pinchas), Some(P::MatosMasei), Some(P::Devarim), Some(P::Vaeschanan),
    Some(P::Eikev), Some(P::Reeh), Some(P::Shoftim), Some(P::KiSeitzei), Some(P::KiSavo),
    Some(P::NitzavimVayeilech),
];

/// Rosh Hashana on Monday, Chaseirim, leap.
static MON_SHORT_LEAP: [Option<P>; 54] = [
    Some(P::Vayeilech), Some(P::HaAzinu), None, Some(P::Bereshis), Some(P::Noach),
    Some(P::LechLecha), Some(P::Vayera), Some(P::ChayeiSara), Some(P::Toldos),
    Some(P::Vayetzei), Some(P::Vayishlach), Some(P::Vayeshev), Some(P::Miketz),
    Some(P::Vayigash), Some(P::Vayechi), Some(P::Shemos), Some(P::Vaera), Some(P::Bo),
    Some(P::Beshalach), Some(P::Yisro), Some(P::Mishpatim), Some(P::Terumah), Some(P::Tetzaveh),
    Some(P::KiSisa), Some(P::Vayakhel), Some(P::Pekudei), Some(P::Vayikra), Some(P::Tzav),
    Some(P::Shmini), Some(P::Tazria), Some(P::Metzora), None, Some(P::AchreiMos),
    Some(P::Kedoshim), Some(P::Emor), Some(P::Behar), Some(P::Bechukosai), Some(P::Bamidbar),
    None, Some(P::Nasso), Some(P::Behaaloscha), Some(P::Shlach), Some(P::Korach),
    Some(P::ChukasBalak), Some(P::Pinchas), Some(P::MatosMasei), Some(P::Devarim),
    Some(P::Vaeschanan), Some(P::Eikev), Some(P::Reeh), Some(P::Shoftim), Some(P::KiSeitzei),
    Some(P::KiSavo), Some(P::NitzavimVayeilech),
];

/// Rosh Hashana on Monday, Chaseirim, leap (Israel).
static MON_SHORT_LEAP_ISRAEL: [Option<P>; 54] = [
    Some(P::Vayeilech), Some(P::HaAzinu), None, Some(P::Bereshis), Some(P::Noach),
    Some(P::LechLecha), Some(P::Vayera), Some(P::ChayeiSara), Some(P::Toldos),
    Some(P::Vayetzei), Some(P::Vayishlach), Some(P::Vayeshev), Some(P::Miketz),
    Some(P::Vayigash), Some(P::Vayechi), Some(P::Shemos), Some(P::Vaera), Some(P::Bo),
    Some(P::Beshalach), Some(P::Yisro), Some(P::Mishpatim), Some(P::Terumah), Some(P::Tetzaveh),
    Some(P::KiSisa), Some(P::Vayakhel), Some(P::Pekudei), Some(P::Vayikra), Some(P::Tzav),
    Some(P::Shmini), Some(P::Tazria), Some(P::Metzora), None, Some(P::AchreiMos),
    Some(P::Kedoshim), Some(P::Emor), Some(P::Behar), Some(P::Bechukosai), Some(P::Bamidbar),
    Some(P::Nasso), Some(P::Behaaloscha), Some(P::Shlach), Some(P::Korach), Some(P::Chukas),
    Some(P::Balak), Some(P::Pinchas), Some(P::MatosMasei), Some(P::Devarim),
    Some(P::Vaeschanan), Some(P::Eikev), Some(P::Reeh), Some(P::Shoftim), Some(P::KiSeitzei),
    Some(P::KiSavo), Some(P::NitzavimVayeilech),
];

/// Rosh Hashana on Monday Shleimim or Tuesday Kesidran, leap.
static MON_LONG_LEAP: [Option<P>; 55] = [
    Some(P::Vayeilech), Some(P::HaAzinu), None, Some(P::Bereshis), Some(P::Noach),
    Some(P::LechLecha), Some(P::Vayera), Some(P::ChayeiSara), Some(P::Toldos),
    Some(P::Vayetzei), Some(P::Vayishlach), Some(P::Vayeshev), Some(P::Miketz),
    Some(P::Vayigash), Some(P::Vayechi), Some(P::Shemos), Some(P::Vaera), Some(P::Bo),
    Some(P::Beshalach), Some(P::Yisro), Some(P::Mishpatim), Some(P::Terumah), Some(P::Tetzaveh),
    Some(P::KiSisa), Some(P::Vayakhel), Some(P::Pekudei), Some(P::Vayikra), Some(P::Tzav),
    Some(P::Shmini), Some(P::Tazria), Some(P::Metzora), None, None, Some(P::AchreiMos),
    Some(P::Kedoshim), Some(P::Emor), Some(P::Behar), Some(P::Bechukosai), Some(P::Bamidbar),
    Some(P::Nasso), Some(P::Behaaloscha), Some(P::Shlach), Some(P::Korach), Some(P::Chukas),
    Some(P::Balak), Some(P::Pinchas), Some(P::MatosMasei), Some(P::Devarim),
    Some(P::Vaeschanan), Some(P::Eikev), Some(P::Reeh), Some(P::Shoftim), Some(P::KiSeitzei),
    Some(P::KiSavo), Some(P::Nitzavim),
];

/// Rosh Hashana on Monday Shleimim or Tuesday Kesidran, leap (Israel).
static MON_LONG_LEAP_ISRAEL: [Option<P>; 55] = [
    Some(P::Vayeilech), Some(P::HaAzinu), None, Some(P::Bereshis), Some(P::Noach),
    Some(P::LechLecha), Some(P::Vayera), Some(P::ChayeiSara), Some(P::Toldos),
    Some(P::Vayetzei), Some(P::Vayishlach), Some(P::Vayeshev), Some(P::Miketz),
    Some(P::Vayigash), Some(P::Vayechi), Some(P::Shemos), Some(P::Vaera), Some(P::Bo),
    Some(P::Beshalach), Some(P::Yisro), Some(P::Mishpatim), Some(P::Terumah), Some(P::Tetzaveh),
    Some(P::KiSisa), Some(P::Vayakhel), Some(P::Pekudei), Some(P::Vayikra), Some(P::Tzav),
    Some(P::Shmini), Some(P::Tazria), Some(P::Metzora), None, Some(P::AchreiMos),
    Some(P::Kedoshim), Some(P::Emor), Some(P::Behar), Some(P::Bechukosai), Some(P::Bamidbar),
    Some(P::Nasso), Some(P::Behaaloscha), Some(P::Shlach), Some(P::Korach), Some(P::Chukas),
    Some(P::Balak), Some(P::Pinchas), Some(P::Matos), Some(P::Masei), Some(P::Devarim),
    Some(P::Vaeschanan), Some(P::Eikev), Some(P::Reeh), Some(P::Shoftim), Some(P::KiSeitzei),
    Some(P::KiSavo), Some(P::Nitzavim),
];

/// Rosh Hashana on Thursday, Chaseirim, leap.
static THU_SHORT_LEAP: [Option<P>; 55] = [
    Some(P::HaAzinu), None, None, Some(P::Bereshis), Some(P::Noach), Some(P::LechLecha),
    Some(P::Vayera), Some(P::ChayeiSara), Some(P::Toldos), Some(P::Vayetzei),
    Some(P::Vayishlach), Some(P::Vayeshev), Some(P::Miketz), Some(P::Vayigash),
    Some(P::Vayechi), Some(P::Shemos), Some(P::Vaera), Some(P::Bo), Some(P::Beshalach),
    Some(P::Yisro), Some(P::Mishpatim), Some(P::Terumah), Some(P::Tetzaveh), Some(P::KiSisa),
    Some(P::Vayakhel), Some(P::Pekudei), Some(P::Vayikra), Some(P::Tzav), Some(P::Shmini),
    Some(P::Tazria), Some(P::Metzora), Some(P::AchreiMos), None, Some(P::Kedoshim),
    Some(P::Emor), Some(P::Behar), Some(P::Bechukosai), Some(P::Bamidbar), Some(P::Nasso),
    Some(P::Behaaloscha), Some(P::Shlach), Some(P::Korach), Some(P::Chukas), Some(P::Balak),
    Some(P::Pinchas), Some(P::Matos), Some(P::Masei), Some(P::Devarim), Some(P::Vaeschanan),
    Some(P::Eikev), Some(P::Reeh), Some(P::Shoftim), Some(P::KiSeitzei), Some(P::KiSavo),
    Some(P::Nitzavim),
];

/// Rosh Hashana on Thursday, Shleimim, leap.
static THU_LONG_LEAP: [Option<P>; 55] = [
    Some(P::HaAzinu), None, None, Some(P::Bereshis), Some(P::Noach), Some(P::LechLecha),
    Some(P::Vayera), Some(P::ChayeiSara), Some(P::Toldos), Some(P::Vayetzei),
    Some(P::Vayishlach), Some(P::Vayeshev), Some(P::Miketz), Some(P::Vayigash),
    Some(P::Vayechi), Some(P::Shemos), Some(P::Vaera), Some(P::Bo), Some(P::Beshalach),
    Some(P::Yisro), Some(P::Mishpatim), Some(P::Terumah), Some(P::Tetzaveh), Some(P::KiSisa),
    Some(P::Vayakhel), Some(P::Pekudei), Some(P::Vayikra), Some(P::Tzav), Some(P::Shmini),
    Some(P::Tazria), Some(P::Metzora), Some(P::AchreiMos), None, Some(P::Kedoshim),
    Some(P::Emor), Some(P::Behar), Some(P::Bechukosai), Some(P::Bamidbar), Some(P::Nasso),
    Some(P::Behaaloscha), Some(P::Shlach), Some(P::Korach), Some(P::Chukas), Some(P::Balak),
    Some(P::Pinchas), Some(P::Matos), Some(P::Masei), Some(P::Devarim), Some(P::Vaeschanan),
    Some(P::Eikev), Some(P::Reeh), Some(P::Shoftim), Some(P::KiSeitzei), Some(P::KiSavo),
    Some(P::NitzavimVayeilech),
];

/// The yearly reading schedule for a year type, indexed by the week number
/// since Rosh Hashana.
///
/// The dechiyos only ever produce fourteen year types per locale. A lookup
/// miss therefore means the elapsed-days computation itself is broken, and
/// is reported as an error rather than an absent reading.
pub(crate) fn schedule_for_year_type(
    rosh_hashana_weekday: Weekday,
    kviah: Kviah,
    leap: bool,
    in_israel: bool,
) -> Result<&'static [Option<P>], CalendarError> {
    use Kviah::{Chaseirim, Kesidran, Shleimim};
    use Weekday::{Monday, Shabbos, Thursday, Tuesday};

    let schedule: Option<&'static [Option<P>]> = if in_israel {
        match (rosh_hashana_weekday, kviah, leap) {
            (Monday, Chaseirim, false) => Some(&MON_SHORT),
            (Monday, Shleimim, false) => Some(&MON_SHORT),
            (Tuesday, Kesidran, false) => Some(&MON_SHORT),
            (Thursday, Kesidran, false) => Some(&THU_NORMAL_ISRAEL),
            (Thursday, Shleimim, false) => Some(&THU_LONG),
            (Shabbos, Chaseirim, false) => Some(&SAT_SHORT),
            (Shabbos, Shleimim, false) => Some(&SAT_LONG),
            (Monday, Chaseirim, true) => Some(&MON_SHORT_LEAP_ISRAEL),
            (Monday, Shleimim, true) => Some(&MON_LONG_LEAP_ISRAEL),
            (Tuesday, Kesidran, true) => Some(&MON_LONG_LEAP_ISRAEL),
            (Thursday, Chaseirim, true) => Some(&THU_SHORT_LEAP),
            (Thursday, Shleimim, true) => Some(&THU_LONG_LEAP),
            (Shabbos, Chaseirim, true) => Some(&SAT_SHORT_LEAP),
            (Shabbos, Shleimim, true) => Some(&SAT_SHORT_LEAP),
            _ => None,
        }
    } else {
        match (rosh_hashana_weekday, kviah, leap) {
            (Monday, Chaseirim, false) => Some(&MON_SHORT),
            (Monday, Shleimim, false) => Some(&MON_LONG),
            (Tuesday, Kesidran, false) => Some(&MON_LONG),
            (Thursday, Kesidran, false) => Some(&THU_NORMAL),
            (Thursday, Shleimim, false) => Some(&THU_LONG),
            (Shabbos, Chaseirim, false) => Some(&SAT_SHORT),
            (Shabbos, Shleimim, false) => Some(&SAT_LONG),
            (Monday, Chaseirim, true) => Some(&MON_SHORT_LEAP),
            (Monday, Shleimim, true) => Some(&MON_LONG_LEAP),
            (Tuesday, Kesidran, true) => Some(&MON_LONG_LEAP),
            (Thursday, Chaseirim, true) => Some(&THU_SHORT_LEAP),
            (Thursday, Shleimim, true) => Some(&THU_LONG_LEAP),
            (Shabbos, Chaseirim, true) => Some(&SAT_SHORT_LEAP),
            (Shabbos, Shleimim, true) => Some(&SAT_LONG_LEAP),
            _ => None,
        }
    };

    schedule.ok_or(CalendarError::UnreachableConfiguration {
        rosh_hashana_weekday: rosh_hashana_weekday.into(),
        kviah,
        leap,
    })
}
