/// Column names of a Helcim transaction export, in file order.
pub const COLUMNS: [&str; 14] = [
    "ORDER_NUMBER",
    "BATCH_NUMBER",
    "CUSTOMER_CODE",
    "CUSTOMER_NAME",
    "SOURCE",
    "CARD",
    "TRANSACTION_TYPE",
    "APPROVAL_CODE",
    "DATE_CREATED",
    "AMOUNT",
    "AMOUNT_TIP",
    "CURRENCY",
    "USER",
    "STATUS",
];

pub const FIELD_COUNT: usize = COLUMNS.len();

macro_rules! header_line {
    () => {
        "ORDER_NUMBER\tBATCH_NUMBER\tCUSTOMER_CODE\tCUSTOMER_NAME\tSOURCE\tCARD\tTRANSACTION_TYPE\tAPPROVAL_CODE\tDATE_CREATED\tAMOUNT\tAMOUNT_TIP\tCURRENCY\tUSER\tSTATUS"
    };
}

/// First line of the export, without its newline.
pub const HEADER: &str = header_line!();

/// Truncated sample of a Helcim transaction export, tab-separated.
///
/// Only a handful of rows are kept here for local testing. A full export has
/// to be dropped in place of the written file by hand.
pub const SAMPLE_TRANSACTIONS: &str = concat!(
    header_line!(),
    "\n",
    "POS-1757440675881\t412\tCST1021\tJane Doe\tSmart Terminal\tVisa\tPurchase\t084213\t09/09/25\t$85.00\t$10.00\tCAD\tFront Desk\tAPPROVED\n",
    "POS-1757441123407\t412\tCST1044\t\t\t\tVerify\t000000\t09/09/25\t$0.00\t$0.00\tCAD\tFront Desk\tAPPROVED\n",
    "POS-1757443876522\t412\tCST1007\tMaria Lopez\tSmart Terminal\tMastercard\tPurchase\t31A7C2\t09/09/25\t$120.00\t$20.00\tCAD\tFront Desk\tAPPROVED\n",
    "POS-1757447210093\t412\t\t\tVirtual Terminal\tVisa\tPurchase\t\t09/09/25\t$45.00\t$0.00\tCAD\tAdmin\tDECLINED\n",
    "POS-1757450034418\t413\tCST1102\tSam Patel\tSmart Terminal\tAmex\tRefund\t90921B\t09/09/25\t$30.00\t$0.00\tCAD\tAdmin\tAPPROVED\n",
);
