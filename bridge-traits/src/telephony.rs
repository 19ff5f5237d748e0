//! Telephony Service Abstraction
//!
//! Read-only access to the cellular radio state of the device.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Radio access technology of an observed cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RadioTechnology {
    Gsm,
    Wcdma,
    Lte,
    Nr,
}

impl RadioTechnology {
    pub fn as_str(&self) -> &'static str {
        match self {
            RadioTechnology::Gsm => "GSM",
            RadioTechnology::Wcdma => "WCDMA",
            RadioTechnology::Lte => "LTE",
            RadioTechnology::Nr => "NR",
        }
    }
}

impl fmt::Display for RadioTechnology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One observed cell record.
///
/// A snapshot entry as reported by the platform radio stack: the identity of
/// the cell (network, cell id, area code) together with the measured signal.
/// Field names are technology-neutral; `area_code` is the LAC on GSM/WCDMA
/// and the TAC on LTE/NR, `channel` is the (E/NR)ARFCN when reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellInfo {
    /// Radio access technology
    pub radio: RadioTechnology,
    /// Whether the device is registered on this cell
    pub registered: bool,
    /// Mobile country code
    pub mcc: u16,
    /// Mobile network code
    pub mnc: u16,
    /// Cell identity (CID/CI/NCI depending on technology)
    pub cell_id: u64,
    /// Location or tracking area code
    pub area_code: u32,
    /// Physical cell id, when the technology reports one
    pub physical_cell_id: Option<u16>,
    /// Absolute RF channel number, when reported
    pub channel: Option<u32>,
    /// Signal strength in dBm
    pub dbm: i16,
    /// Quality bucket from 0 (none) to 4 (great)
    pub level: u8,
}

impl fmt::Display for CellInfo {
    /// Opaque text form of the record, in the platform `toString` spirit.
    ///
    /// Optional fields are omitted entirely when absent so the rendering is
    /// stable for a given record value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CellInfo{{radio={}, registered={}, plmn={}-{:02}, cid={}, area={}",
            self.radio, self.registered, self.mcc, self.mnc, self.cell_id, self.area_code
        )?;
        if let Some(pci) = self.physical_cell_id {
            write!(f, ", pci={}", pci)?;
        }
        if let Some(channel) = self.channel {
            write!(f, ", channel={}", channel)?;
        }
        write!(f, ", dbm={}, level={}}}", self.dbm, self.level)
    }
}

/// Render a cell record collection the way the platform renders a list:
/// bracketed, comma separated, `[]` when empty.
///
/// This is the wire text a capability payload carries; callers comparing
/// payloads against known records should build the expectation with this
/// same function.
pub fn format_cell_records(records: &[CellInfo]) -> String {
    let mut out = String::from("[");
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&record.to_string());
    }
    out.push(']');
    out
}

/// Telephony provider trait
///
/// The platform's telephony service, treated as an opaque read-only data
/// source. One call returns the full set of currently visible cell records;
/// no ordering is guaranteed beyond what the platform reports.
///
/// # Errors
///
/// Implementations map platform failures onto [`BridgeError`](crate::BridgeError):
/// - missing/null service handle -> `NotAvailable`
/// - denied location/phone permission -> `PermissionDenied`
/// - any other query throw -> `QueryFailed`
///
/// # Example
///
/// ```ignore
/// use bridge_traits::telephony::TelephonyProvider;
///
/// async fn strongest_dbm(provider: &dyn TelephonyProvider) -> Option<i16> {
///     let records = provider.all_cell_info().await.ok()?;
///     records.iter().map(|r| r.dbm).max()
/// }
/// ```
#[async_trait::async_trait]
pub trait TelephonyProvider: Send + Sync {
    /// Query all currently visible cell records.
    async fn all_cell_info(&self) -> Result<Vec<CellInfo>>;

    /// The cell the device is currently registered on, if any.
    async fn registered_cell(&self) -> Result<Option<CellInfo>> {
        let records = self.all_cell_info().await?;
        Ok(records.into_iter().find(|r| r.registered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BridgeError;

    fn lte_cell(cell_id: u64, registered: bool) -> CellInfo {
        CellInfo {
            radio: RadioTechnology::Lte,
            registered,
            mcc: 242,
            mnc: 1,
            cell_id,
            area_code: 21405,
            physical_cell_id: Some(101),
            channel: Some(6300),
            dbm: -95,
            level: 2,
        }
    }

    #[test]
    fn display_renders_all_present_fields() {
        let cell = lte_cell(104_223_003, true);
        assert_eq!(
            cell.to_string(),
            "CellInfo{radio=LTE, registered=true, plmn=242-01, cid=104223003, \
             area=21405, pci=101, channel=6300, dbm=-95, level=2}"
        );
    }

    #[test]
    fn display_omits_absent_fields() {
        let cell = CellInfo {
            radio: RadioTechnology::Gsm,
            registered: false,
            mcc: 242,
            mnc: 2,
            cell_id: 3321,
            area_code: 400,
            physical_cell_id: None,
            channel: None,
            dbm: -88,
            level: 3,
        };
        assert_eq!(
            cell.to_string(),
            "CellInfo{radio=GSM, registered=false, plmn=242-02, cid=3321, \
             area=400, dbm=-88, level=3}"
        );
    }

    #[test]
    fn format_empty_collection() {
        assert_eq!(format_cell_records(&[]), "[]");
    }

    #[test]
    fn format_joins_with_comma_space() {
        let a = lte_cell(1, true);
        let b = lte_cell(2, false);
        let rendered = format_cell_records(&[a.clone(), b.clone()]);
        assert_eq!(rendered, format!("[{}, {}]", a, b));
    }

    struct TwoCellProvider;

    #[async_trait::async_trait]
    impl TelephonyProvider for TwoCellProvider {
        async fn all_cell_info(&self) -> Result<Vec<CellInfo>> {
            Ok(vec![lte_cell(7, false), lte_cell(8, true)])
        }
    }

    struct DeniedProvider;

    #[async_trait::async_trait]
    impl TelephonyProvider for DeniedProvider {
        async fn all_cell_info(&self) -> Result<Vec<CellInfo>> {
            Err(BridgeError::PermissionDenied("no permission".into()))
        }
    }

    #[tokio::test]
    async fn registered_cell_picks_registered_record() {
        let provider = TwoCellProvider;
        let cell = provider.registered_cell().await.unwrap().unwrap();
        assert_eq!(cell.cell_id, 8);
        assert!(cell.registered);
    }

    #[tokio::test]
    async fn registered_cell_propagates_errors() {
        let provider = DeniedProvider;
        let err = provider.registered_cell().await.unwrap_err();
        assert!(matches!(err, BridgeError::PermissionDenied(_)));
    }
}
