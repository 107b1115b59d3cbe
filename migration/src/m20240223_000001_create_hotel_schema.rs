use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create user table
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(User::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(User::Pseudo).string_len(64).not_null())
                    .col(ColumnDef::new(User::Email).string_len(120).not_null().unique_key())
                    .col(ColumnDef::new(User::Password).string_len(256).not_null())
                    .col(ColumnDef::new(User::Role).string_len(64).not_null().default("guest"))
                    .to_owned(),
            )
            .await?;

        // Create hotel table
        manager
            .create_table(
                Table::create()
                    .table(Hotel::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Hotel::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Hotel::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Hotel::Location).string_len(255).not_null())
                    .col(ColumnDef::new(Hotel::Description).string_len(255).not_null())
                    .col(ColumnDef::new(Hotel::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Create chambres table
        manager
            .create_table(
                Table::create()
                    .table(Chambres::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Chambres::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Chambres::Numero).integer().not_null())
                    .col(ColumnDef::new(Chambres::NbPersonne).integer().not_null())
                    .col(ColumnDef::new(Chambres::HotelId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chambres_hotel_id")
                            .from(Chambres::Table, Chambres::HotelId)
                            .to(Hotel::Table, Hotel::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Create image table
        manager
            .create_table(
                Table::create()
                    .table(Image::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Image::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Image::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Image::Data).binary().not_null())
                    .col(ColumnDef::new(Image::HotelId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_image_hotel_id")
                            .from(Image::Table, Image::HotelId)
                            .to(Hotel::Table, Hotel::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Create booking table
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Booking::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Booking::ChambreId).integer().not_null())
                    .col(ColumnDef::new(Booking::UserId).integer().not_null())
                    .col(ColumnDef::new(Booking::Datein).date().not_null())
                    .col(ColumnDef::new(Booking::Dateout).date().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_chambre_id")
                            .from(Booking::Table, Booking::ChambreId)
                            .to(Chambres::Table, Chambres::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_user_id")
                            .from(Booking::Table, Booking::UserId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Indexes on the foreign keys the cascade deletes filter on
        manager
            .create_index(
                Index::create()
                    .name("idx_chambres_hotel_id")
                    .table(Chambres::Table)
                    .col(Chambres::HotelId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_image_hotel_id")
                    .table(Image::Table)
                    .col(Image::HotelId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_chambre_id")
                    .table(Booking::Table)
                    .col(Booking::ChambreId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_user_id")
                    .table(Booking::Table)
                    .col(Booking::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Children before parents
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Image::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Chambres::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Hotel::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    Pseudo,
    Email,
    Password,
    Role,
}

#[derive(DeriveIden)]
enum Hotel {
    Table,
    Id,
    Name,
    Location,
    Description,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Chambres {
    Table,
    Id,
    Numero,
    NbPersonne,
    HotelId,
}

#[derive(DeriveIden)]
enum Image {
    Table,
    Id,
    Name,
    Data,
    HotelId,
}

#[derive(DeriveIden)]
enum Booking {
    Table,
    Id,
    ChambreId,
    UserId,
    Datein,
    Dateout,
}
