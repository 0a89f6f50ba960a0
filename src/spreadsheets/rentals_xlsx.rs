use crate::domain::RentalRow;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::Workbook;

pub fn export_rentals_xlsx(rentals: &[RentalRow]) -> ResultResp {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // Headers
    let headers = [
        "Equipment",
        "Renter",
        "Start",
        "End",
        "Days",
        "Total",
        "Status",
        "Notes",
    ];

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    // Rows
    for (i, row) in rentals.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_string(r, 0, row.label())
            .map_err(|e| ServerError::XlsxError(format!("Failed to write equipment: {}", e)))?;

        worksheet
            .write_string(r, 1, &row.rental.renter)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write renter: {}", e)))?;

        worksheet
            .write_string(r, 2, row.rental.start_date.to_string())
            .map_err(|e| ServerError::XlsxError(format!("Failed to write start date: {}", e)))?;

        worksheet
            .write_string(r, 3, row.rental.end_date.to_string())
            .map_err(|e| ServerError::XlsxError(format!("Failed to write end date: {}", e)))?;

        worksheet
            .write_number(r, 4, row.rental.days as f64)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write days: {}", e)))?;

        worksheet
            .write_number(r, 5, row.rental.total)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write total: {}", e)))?;

        worksheet
            .write_string(r, 6, row.rental.status.to_string())
            .map_err(|e| ServerError::XlsxError(format!("Failed to write status: {}", e)))?;

        worksheet
            .write_string(r, 7, &row.rental.notes)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write notes: {}", e)))?;
    }

    let buffer = workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))?;

    xlsx_response(buffer, "rentals.xlsx")
}
